use entity::prelude::*;
use reqwest::{multipart::Form, Method};
use tracing::info;
use validator::Validate;

use super::{Listings, SubletRequest, SubletResponse};
use crate::{
    sublet::{
        CREATE_SUBLET, CREATE_SUBLET_IMAGE, DESTROY_SUBLET, LIST_SUBLETS,
        UPDATE_SUBLET,
    },
    Client, ClientError, Image, RequestBody, Response,
};

impl Listings for Client {
    async fn list_sublets(&self) -> Response<Vec<SubletEntity>> {
        let sublets: Vec<SubletResponse> = self
            .fetch(LIST_SUBLETS, Method::GET, RequestBody::Empty)
            .await?;

        Ok(sublets.into_iter().map(SubletEntity::from).collect())
    }

    async fn create_sublet(&self, sublet: &SubletEntity) -> Response<SubletEntity> {
        sublet.validate()?;

        let body = RequestBody::json(&SubletRequest::from(sublet))?;
        let created: SubletResponse =
            self.fetch(CREATE_SUBLET, Method::POST, body).await?;

        info!(task = "create sublet", id = created.id);
        Ok(created.into())
    }

    async fn update_sublet(&self, sublet: &SubletEntity) -> Response<SubletEntity> {
        let id = sublet.id.ok_or(ClientError::Unsaved { kind: "sublet" })?;
        sublet.validate()?;

        let body = RequestBody::json(&SubletRequest::from(sublet))?;
        let updated: SubletResponse = self
            .fetch(&format!("{}{}", UPDATE_SUBLET, id), Method::PATCH, body)
            .await?;

        info!(task = "update sublet", id);
        Ok(updated.into())
    }

    async fn destroy_sublet(&self, id: i64) -> Response<()> {
        self.send(
            &format!("{}{}", DESTROY_SUBLET, id),
            Method::DELETE,
            RequestBody::Empty,
        )
        .await?;

        info!(task = "destroy sublet", id);
        Ok(())
    }

    async fn create_sublet_images(
        &self,
        id: i64,
        images: Vec<Image>,
    ) -> Response<()> {
        let count = images.len();
        let mut form = Form::new();
        for image in images {
            form = form.part("images", image.into_part()?);
        }

        self.send(
            &format!("{}{}", CREATE_SUBLET_IMAGE, id),
            Method::POST,
            RequestBody::Multipart(form),
        )
        .await?;

        info!(task = "upload sublet images", id, count);
        Ok(())
    }
}
