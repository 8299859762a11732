use std::borrow::Cow;

use reqwest::{
    header::HeaderValue,
    multipart::{Form, Part},
    Method,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use validator::{ValidationError, ValidationErrors};

use crate::{
    csrf::CSRF_HEADER, error::IntoResponse, Client, ClientError, Response,
};

/// What goes on the wire with a request.
#[derive(Debug, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    /// Sent as `application/json`.
    Json(Value),
    /// Passed through untouched so the transport writes the boundary.
    Multipart(Form),
}

impl RequestBody {
    pub fn json<T: Serialize>(body: &T) -> Response<Self> {
        let value = serde_json::to_value(body)
            .into_response("failed to serialize body")?;
        Ok(RequestBody::Json(value))
    }
}

/// An image selected for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Image {
    /// A malformed `content_type` is rejected as invalid input before
    /// anything is sent.
    pub(crate) fn into_part(self) -> Response<Part> {
        let content_type = self.content_type;
        Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&content_type)
            .map_err(|_| {
                let mut errors = ValidationErrors::new();
                errors.add(
                    "content_type",
                    ValidationError::new("content_type").with_message(
                        Cow::Owned(format!(
                            "invalid image content type {:?}",
                            content_type
                        )),
                    ),
                );
                ClientError::Validation(errors)
            })
    }
}

impl Client {
    /// Sends one request and parses the reply as JSON.
    ///
    /// The CSRF token from the cookie jar is always attached, as are the
    /// session cookies and, when configured, basic credentials. An empty
    /// reply body yields `None`.
    #[tracing::instrument(skip(self, body), fields(status))]
    pub async fn request(
        &self,
        path: &str,
        method: Method,
        body: RequestBody,
    ) -> Response<Option<Value>> {
        let url = self.url(path)?;
        let csrf = HeaderValue::from_str(&self.csrf_token()).map_err(|e| {
            ClientError::Config {
                message: format!("csrf cookie is not a valid header value: {}", e),
            }
        })?;

        let mut builder =
            self.http.request(method, url).header(CSRF_HEADER, csrf);

        if let Some(auth) = &self.basic_auth {
            builder = builder.basic_auth(&auth.username, Some(&auth.password));
        }

        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(form) => builder.multipart(form),
        };

        let response = builder.send().await.into_response("failed to send")?;

        let status = response.status();
        tracing::Span::current().record("status", status.as_u16());

        let text = response
            .text()
            .await
            .into_response("failed to read response body")?;

        if !status.is_success() {
            let body =
                parse_body(&text).into_response("failed to parse error body")?;
            warn!(task = "request", status = status.as_u16(), path);
            return Err(ClientError::RequestFailed { status, body });
        }

        debug!(task = "request", status = status.as_u16(), path);
        parse_body(&text).into_response("failed to parse response body")
    }

    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        method: Method,
        body: RequestBody,
    ) -> Response<T> {
        let value = self.request(path, method, body).await?.unwrap_or(Value::Null);

        serde_json::from_value(value)
            .into_response(&format!("unexpected response shape from {}", path))
    }

    pub(crate) async fn send(
        &self,
        path: &str,
        method: Method,
        body: RequestBody,
    ) -> Response<()> {
        self.request(path, method, body).await.map(|_| ())
    }
}

fn parse_body(text: &str) -> serde_json::Result<Option<Value>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(text).map(Some)
}
