use entity::prelude::*;
use reqwest::{multipart::Form, Method};
use tracing::info;
use validator::Validate;

use super::{PostResponse, Posts, UpdatePostRequest};
use crate::{
    datetime, portal::POSTS, Client, ClientError, Image, RequestBody,
    Response,
};

impl Posts for Client {
    async fn list_posts(&self) -> Response<Vec<PostEntity>> {
        let posts: Vec<PostResponse> =
            self.fetch(POSTS, Method::GET, RequestBody::Empty).await?;

        Ok(posts.into_iter().map(PostEntity::from).collect())
    }

    async fn get_post(&self, id: i64) -> Response<PostEntity> {
        let post: PostResponse = self
            .fetch(&format!("{}{}/", POSTS, id), Method::GET, RequestBody::Empty)
            .await?;

        Ok(post.into())
    }

    async fn create_post(
        &self,
        post: &PostEntity,
        image: Option<Image>,
    ) -> Response<PostEntity> {
        post.validate()?;

        let form = post_form(post, image)?;
        let created: PostResponse = self
            .fetch(POSTS, Method::POST, RequestBody::Multipart(form))
            .await?;

        info!(task = "create post", id = created.id);
        Ok(created.into())
    }

    async fn update_post(&self, post: &PostEntity) -> Response<PostEntity> {
        let id = post.id.ok_or(ClientError::Unsaved { kind: "post" })?;
        post.validate()?;

        let body = RequestBody::json(&UpdatePostRequest::from(post))?;
        let updated: PostResponse = self
            .fetch(&format!("{}{}/", POSTS, id), Method::PATCH, body)
            .await?;

        info!(task = "update post", id);
        Ok(updated.into())
    }

    async fn delete_post(&self, id: i64) -> Response<()> {
        self.send(&format!("{}{}/", POSTS, id), Method::DELETE, RequestBody::Empty)
            .await?;

        info!(task = "delete post", id);
        Ok(())
    }
}

fn post_form(post: &PostEntity, image: Option<Image>) -> Response<Form> {
    let mut form = Form::new()
        .text("club_code", post.club_code.clone())
        .text("title", post.title.clone())
        .text("subtitle", post.subtitle.clone());

    let optional = [
        ("post_url", post.post_url.clone()),
        ("club_comment", post.club_comment.clone()),
        ("start_date", post.start_date.as_ref().map(datetime::format)),
        ("expire_date", post.expire_date.as_ref().map(datetime::format)),
    ];
    for (name, value) in optional {
        if let Some(value) = value {
            form = form.text(name, value);
        }
    }

    for population in &post.target_populations {
        form = form.text("target_populations", population.to_string());
    }

    if let Some(image) = image {
        form = form.part("new_image", image.into_part()?);
    }

    Ok(form)
}
