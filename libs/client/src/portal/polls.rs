pub mod implementation;

use chrono::{DateTime, Utc};
use draft::Draft;
use entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::Response;

pub trait Polls {
    fn list_polls(
        &self,
    ) -> impl std::future::Future<Output = Response<Vec<PollEntity>>> + Send;
    fn get_poll(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Response<PollEntity>> + Send;
    /// Creates the poll, then its options one request at a time. If any
    /// option write fails the new poll is deleted again.
    fn create_poll(
        &self,
        poll: &PollEntity,
    ) -> impl std::future::Future<Output = Response<PollEntity>> + Send;
    /// Patches the poll, then replays the option diff between the draft's
    /// original and current state in order: deletes, updates, creates.
    fn update_poll(
        &self,
        draft: &Draft<PollEntity>,
    ) -> impl std::future::Future<Output = Response<PollEntity>> + Send;
    fn delete_poll(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Response<()>> + Send;
    /// Poll with per-option vote counts.
    fn option_view(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Response<PollEntity>> + Send;
    fn get_option(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Response<PollOptionEntity>> + Send;
    fn create_option(
        &self,
        poll_id: i64,
        choice: &str,
    ) -> impl std::future::Future<Output = Response<PollOptionEntity>> + Send;
    fn update_option(
        &self,
        option: &PollOptionEntity,
    ) -> impl std::future::Future<Output = Response<PollOptionEntity>> + Send;
    fn delete_option(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Response<()>> + Send;
}

#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct PollResponse {
    pub id: i64,
    #[serde(default)]
    pub club_code: String,
    pub question: String,
    #[serde(default)]
    pub options: Vec<PollOptionResponse>,
    #[serde(default)]
    pub multiselect: bool,
    #[serde(default)]
    pub status: Status,
    #[serde(default, with = "crate::datetime::lenient")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::datetime::lenient")]
    pub expire_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub target_populations: Vec<i64>,
    pub club_comment: Option<String>,
    pub admin_comment: Option<String>,
}

#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct PollOptionResponse {
    pub id: i64,
    pub choice: String,
    #[serde(default)]
    pub vote_count: i64,
}

/// Body of both `POST` and `PATCH` on a poll. Options travel separately.
/// Unset optional fields are sent as `null` so a `PATCH` can clear them.
#[derive(Serialize, Debug, PartialEq, Clone)]
pub struct PollRequest {
    pub club_code: String,
    pub question: String,
    pub multiselect: bool,
    #[serde(with = "crate::datetime::lenient")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(with = "crate::datetime::lenient")]
    pub expire_date: Option<DateTime<Utc>>,
    pub target_populations: Vec<i64>,
    pub club_comment: Option<String>,
}

#[derive(Serialize, Debug, PartialEq, Clone)]
pub struct CreateOptionRequest<'a> {
    pub poll: i64,
    pub choice: &'a str,
}

#[derive(Serialize, Debug, PartialEq, Clone)]
pub struct UpdateOptionRequest<'a> {
    pub choice: &'a str,
}

impl From<PollOptionResponse> for PollOptionEntity {
    fn from(value: PollOptionResponse) -> Self {
        Self {
            id: value.id,
            choice: value.choice,
            vote_count: value.vote_count,
        }
    }
}

impl From<PollResponse> for PollEntity {
    fn from(value: PollResponse) -> Self {
        Self {
            id: Some(value.id),
            club_code: value.club_code,
            question: value.question,
            options: value.options.into_iter().map(Into::into).collect(),
            multiselect: value.multiselect,
            status: value.status,
            start_date: value.start_date,
            expire_date: value.expire_date,
            target_populations: value.target_populations,
            club_comment: value.club_comment,
            admin_comment: value.admin_comment,
        }
    }
}

impl From<&PollEntity> for PollRequest {
    fn from(value: &PollEntity) -> Self {
        Self {
            club_code: value.club_code.clone(),
            question: value.question.clone(),
            multiselect: value.multiselect,
            start_date: value.start_date,
            expire_date: value.expire_date,
            target_populations: value.target_populations.clone(),
            club_comment: value.club_comment.clone(),
        }
    }
}
