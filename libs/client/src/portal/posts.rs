pub mod implementation;

use chrono::{DateTime, Utc};
use entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{Image, Response};

pub trait Posts {
    fn list_posts(
        &self,
    ) -> impl std::future::Future<Output = Response<Vec<PostEntity>>> + Send;
    fn get_post(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Response<PostEntity>> + Send;
    /// Validates, then uploads the post as multipart form data.
    fn create_post(
        &self,
        post: &PostEntity,
        image: Option<Image>,
    ) -> impl std::future::Future<Output = Response<PostEntity>> + Send;
    fn update_post(
        &self,
        post: &PostEntity,
    ) -> impl std::future::Future<Output = Response<PostEntity>> + Send;
    fn delete_post(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Response<()>> + Send;
}

#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct PostResponse {
    pub id: i64,
    #[serde(default)]
    pub club_code: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub post_url: Option<String>,
    pub image_url: Option<String>,
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

/// JSON body of a `PATCH`. Status is never sent, transitions happen on
/// review. Cleared optional fields go out as `null`.
#[derive(Serialize, Debug, PartialEq, Clone)]
pub struct UpdatePostRequest {
    pub title: String,
    pub subtitle: String,
    pub post_url: Option<String>,
    pub image_url: Option<String>,
    #[serde(with = "crate::datetime::lenient")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(with = "crate::datetime::lenient")]
    pub expire_date: Option<DateTime<Utc>>,
    pub target_populations: Vec<i64>,
    pub club_comment: Option<String>,
}

impl From<PostResponse> for PostEntity {
    fn from(value: PostResponse) -> Self {
        Self {
            id: Some(value.id),
            club_code: value.club_code,
            title: value.title,
            subtitle: value.subtitle,
            post_url: value.post_url,
            image_url: value.image_url,
            status: value.status,
            start_date: value.start_date,
            expire_date: value.expire_date,
            target_populations: value.target_populations,
            club_comment: value.club_comment,
            admin_comment: value.admin_comment,
        }
    }
}

impl From<&PostEntity> for UpdatePostRequest {
    fn from(value: &PostEntity) -> Self {
        Self {
            title: value.title.clone(),
            subtitle: value.subtitle.clone(),
            post_url: value.post_url.clone(),
            image_url: value.image_url.clone(),
            start_date: value.start_date,
            expire_date: value.expire_date,
            target_populations: value.target_populations.clone(),
            club_comment: value.club_comment.clone(),
        }
    }
}
