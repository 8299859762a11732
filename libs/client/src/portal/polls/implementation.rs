use draft::{plan_option_sync, Draft, OptionStep};
use entity::prelude::*;
use reqwest::Method;
use tracing::{error, info};
use validator::Validate;

use super::{
    CreateOptionRequest, PollOptionResponse, PollRequest, PollResponse, Polls,
    UpdateOptionRequest,
};
use crate::{
    portal::{OPTIONS, POLLS},
    Client, ClientError, OptionSyncFailure, RequestBody, Response,
};

impl Polls for Client {
    async fn list_polls(&self) -> Response<Vec<PollEntity>> {
        let polls: Vec<PollResponse> =
            self.fetch(POLLS, Method::GET, RequestBody::Empty).await?;

        Ok(polls.into_iter().map(PollEntity::from).collect())
    }

    async fn get_poll(&self, id: i64) -> Response<PollEntity> {
        let poll: PollResponse = self
            .fetch(&format!("{}{}/", POLLS, id), Method::GET, RequestBody::Empty)
            .await?;

        Ok(poll.into())
    }

    async fn create_poll(&self, poll: &PollEntity) -> Response<PollEntity> {
        poll.validate()?;

        let body = RequestBody::json(&PollRequest::from(poll))?;
        let created: PollResponse =
            self.fetch(POLLS, Method::POST, body).await?;
        let id = created.id;

        let plan = plan_option_sync(&[], &poll.options);
        let attempted = plan.len();
        let failures = self
            .apply_option_steps(id, plan.steps().collect(), true)
            .await;

        if !failures.is_empty() {
            let rolled_back = match self.delete_poll(id).await {
                Ok(()) => true,
                Err(e) => {
                    error!(task = "roll back poll", id, error = e.to_string());
                    false
                }
            };
            return Err(ClientError::OptionSync {
                attempted,
                failures,
                rolled_back,
            });
        }

        info!(task = "create poll", id, options = attempted);
        self.get_poll(id).await
    }

    async fn update_poll(
        &self,
        draft: &Draft<PollEntity>,
    ) -> Response<PollEntity> {
        let poll = draft.state();
        let id = poll.id.ok_or(ClientError::Unsaved { kind: "poll" })?;
        poll.validate()?;

        let body = RequestBody::json(&PollRequest::from(poll))?;
        self.send(&format!("{}{}/", POLLS, id), Method::PATCH, body)
            .await?;

        let plan = plan_option_sync(&draft.original().options, &poll.options);
        let attempted = plan.len();
        let failures = self
            .apply_option_steps(id, plan.steps().collect(), false)
            .await;

        if !failures.is_empty() {
            return Err(ClientError::OptionSync {
                attempted,
                failures,
                rolled_back: false,
            });
        }

        info!(task = "update poll", id, option_writes = attempted);
        self.get_poll(id).await
    }

    async fn delete_poll(&self, id: i64) -> Response<()> {
        self.send(&format!("{}{}/", POLLS, id), Method::DELETE, RequestBody::Empty)
            .await?;

        info!(task = "delete poll", id);
        Ok(())
    }

    async fn option_view(&self, id: i64) -> Response<PollEntity> {
        let poll: PollResponse = self
            .fetch(
                &format!("{}{}/option_view/", POLLS, id),
                Method::GET,
                RequestBody::Empty,
            )
            .await?;

        Ok(poll.into())
    }

    async fn get_option(&self, id: i64) -> Response<PollOptionEntity> {
        let option: PollOptionResponse = self
            .fetch(&format!("{}{}/", OPTIONS, id), Method::GET, RequestBody::Empty)
            .await?;

        Ok(option.into())
    }

    async fn create_option(
        &self,
        poll_id: i64,
        choice: &str,
    ) -> Response<PollOptionEntity> {
        let body = RequestBody::json(&CreateOptionRequest {
            poll: poll_id,
            choice,
        })?;
        let option: PollOptionResponse =
            self.fetch(OPTIONS, Method::POST, body).await?;

        Ok(option.into())
    }

    async fn update_option(
        &self,
        option: &PollOptionEntity,
    ) -> Response<PollOptionEntity> {
        let body = RequestBody::json(&UpdateOptionRequest {
            choice: &option.choice,
        })?;
        let option: PollOptionResponse = self
            .fetch(&format!("{}{}/", OPTIONS, option.id), Method::PATCH, body)
            .await?;

        Ok(option.into())
    }

    async fn delete_option(&self, id: i64) -> Response<()> {
        self.send(&format!("{}{}/", OPTIONS, id), Method::DELETE, RequestBody::Empty)
            .await
    }
}

impl Client {
    /// Runs option writes one after another and collects what failed.
    async fn apply_option_steps(
        &self,
        poll_id: i64,
        steps: Vec<OptionStep>,
        stop_on_failure: bool,
    ) -> Vec<OptionSyncFailure> {
        let mut failures = Vec::new();

        for step in steps {
            let result = match &step {
                OptionStep::Delete(id) => self.delete_option(*id).await,
                OptionStep::Update(option) => {
                    self.update_option(option).await.map(|_| ())
                }
                OptionStep::Create(option) => self
                    .create_option(poll_id, &option.choice)
                    .await
                    .map(|_| ()),
            };

            if let Err(error) = result {
                error!(
                    task = "sync poll option",
                    poll_id,
                    step = format!("{:?}", step),
                    error = error.to_string(),
                );
                failures.push(OptionSyncFailure { step, error });
                if stop_on_failure {
                    break;
                }
            }
        }

        failures
    }
}
