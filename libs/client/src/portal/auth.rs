use entity::prelude::*;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{LOGIN, LOGOUT, ME};
use crate::{Client, ClientError, RequestBody, Response};

pub trait Auth {
    /// Starts a session. The backend answers with session and CSRF cookies
    /// which the client keeps for later requests.
    fn login(
        &self,
        username: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Response<()>> + Send;
    fn logout(&self) -> impl std::future::Future<Output = Response<()>> + Send;
    fn me(&self) -> impl std::future::Future<Output = Response<UserEntity>> + Send;
    /// Like [`Auth::me`] but maps 401 and 403 to an anonymous context.
    fn auth_context(
        &self,
    ) -> impl std::future::Future<Output = Response<AuthContext>> + Send;
}

#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct UserResponse {
    pub pennid: i64,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub groups: Vec<String>,
}

#[derive(Serialize, Debug, PartialEq, Clone)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl From<UserResponse> for UserEntity {
    fn from(value: UserResponse) -> Self {
        Self {
            pennid: value.pennid,
            username: value.username,
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            groups: value.groups,
        }
    }
}

impl Auth for Client {
    async fn login(&self, username: &str, password: &str) -> Response<()> {
        let body = RequestBody::json(&LoginRequest { username, password })?;
        self.send(LOGIN, Method::POST, body).await?;

        info!(task = "login", username);
        Ok(())
    }

    async fn logout(&self) -> Response<()> {
        self.send(LOGOUT, Method::POST, RequestBody::Empty).await
    }

    async fn me(&self) -> Response<UserEntity> {
        let user: UserResponse =
            self.fetch(ME, Method::GET, RequestBody::Empty).await?;

        Ok(user.into())
    }

    async fn auth_context(&self) -> Response<AuthContext> {
        match self.me().await {
            Ok(user) => Ok(AuthContext::authenticated(user)),
            Err(ClientError::RequestFailed { status, .. })
                if status == StatusCode::UNAUTHORIZED
                    || status == StatusCode::FORBIDDEN =>
            {
                Ok(AuthContext::anonymous())
            }
            Err(e) => Err(e),
        }
    }
}
