use chrono::{DateTime, Utc};
use entity::prelude::*;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use tracing::info;
use validator::Validate;

use super::{CREATE_OFFER, DESTROY_OFFER, LIST_OFFERS};
use crate::{Client, RequestBody, Response};

pub trait Offers {
    /// Offers made on the listing `sublet_id`. Only its owner may ask.
    fn list_offers(
        &self,
        sublet_id: i64,
    ) -> impl std::future::Future<Output = Response<Vec<OfferEntity>>> + Send;
    /// Makes an offer on `offer.sublet`.
    fn create_offer(
        &self,
        offer: &OfferEntity,
    ) -> impl std::future::Future<Output = Response<OfferEntity>> + Send;
    /// Withdraws the current user's offer on the listing `sublet_id`.
    fn destroy_offer(
        &self,
        sublet_id: i64,
    ) -> impl std::future::Future<Output = Response<()>> + Send;
}

#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct OfferResponse {
    pub id: i64,
    pub user: i64,
    pub sublet: i64,
    pub email: Option<String>,
    pub phone_number: String,
    pub message: Option<String>,
    #[serde(default, with = "crate::datetime::lenient")]
    pub created_date: Option<DateTime<Utc>>,
}

#[skip_serializing_none]
#[derive(Serialize, Debug, PartialEq, Clone)]
pub struct CreateOfferRequest<'a> {
    pub email: Option<&'a str>,
    pub phone_number: &'a str,
    pub message: Option<&'a str>,
}

impl From<OfferResponse> for OfferEntity {
    fn from(value: OfferResponse) -> Self {
        Self {
            id: Some(value.id),
            user: value.user,
            sublet: value.sublet,
            email: value.email,
            phone_number: value.phone_number,
            message: value.message,
            created_date: value.created_date,
        }
    }
}

impl<'a> From<&'a OfferEntity> for CreateOfferRequest<'a> {
    fn from(value: &'a OfferEntity) -> Self {
        Self {
            email: value.email.as_deref(),
            phone_number: &value.phone_number,
            message: value.message.as_deref(),
        }
    }
}

impl Offers for Client {
    async fn list_offers(&self, sublet_id: i64) -> Response<Vec<OfferEntity>> {
        let offers: Vec<OfferResponse> = self
            .fetch(
                &format!("{}{}", LIST_OFFERS, sublet_id),
                Method::GET,
                RequestBody::Empty,
            )
            .await?;

        Ok(offers.into_iter().map(Into::into).collect())
    }

    async fn create_offer(&self, offer: &OfferEntity) -> Response<OfferEntity> {
        offer.validate()?;

        let body = RequestBody::json(&CreateOfferRequest::from(offer))?;
        let created: OfferResponse = self
            .fetch(
                &format!("{}{}", CREATE_OFFER, offer.sublet),
                Method::POST,
                body,
            )
            .await?;

        info!(task = "create offer", sublet = offer.sublet, id = created.id);
        Ok(created.into())
    }

    async fn destroy_offer(&self, sublet_id: i64) -> Response<()> {
        self.send(
            &format!("{}{}", DESTROY_OFFER, sublet_id),
            Method::DELETE,
            RequestBody::Empty,
        )
        .await
    }
}

#[cfg(test)]
mod test {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
        routing::{delete, get, post},
        Json, Router,
    };
    use serde_json::{json, Value};

    use super::*;
    use crate::{testing, ClientError};

    type Received = Arc<Mutex<Vec<Value>>>;

    async fn create(
        State(received): State<Received>,
        Path(sublet): Path<i64>,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        received.lock().unwrap().push(body.clone());
        (
            StatusCode::CREATED,
            Json(json!({
                "id": 9,
                "user": 42,
                "sublet": sublet,
                "email": body["email"],
                "phone_number": body["phone_number"],
                "message": body.get("message"),
                "created_date": "2024-04-02T10:00:00Z",
            })),
        )
    }

    fn router(received: Received) -> Router {
        Router::new()
            .route(
                "/api/sublet/listOffers/7",
                get(|| async {
                    Json(json!([{
                        "id": 1,
                        "user": 3,
                        "sublet": 7,
                        "email": null,
                        "phone_number": "2155550100",
                        "message": "Still available?",
                        "created_date": "not a date",
                    }]))
                }),
            )
            .route("/api/sublet/createOffer/:sublet", post(create))
            .route(
                "/api/sublet/destroyOffer/7",
                delete(|| async { StatusCode::NO_CONTENT }),
            )
            .with_state(received)
    }

    fn offer() -> OfferEntity {
        OfferEntity {
            sublet: 7,
            email: Some("ben@upenn.edu".to_string()),
            phone_number: "2155550100".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_list_offers() {
        let client = testing::serve(router(Received::default())).await;

        let offers = client.list_offers(7).await.unwrap();

        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].message.as_deref(), Some("Still available?"));
        assert_eq!(offers[0].created_date, None);
    }

    #[tokio::test]
    async fn test_create_offer() {
        // Arrange
        let received = Received::default();
        let client = testing::serve(router(received.clone())).await;

        // Act
        let created = client.create_offer(&offer()).await.unwrap();

        // Assert
        assert_eq!(created.id, Some(9));
        assert_eq!(created.sublet, 7);
        assert!(created.created_date.is_some());
        let body = received.lock().unwrap()[0].clone();
        assert_eq!(
            body,
            json!({"email": "ben@upenn.edu", "phone_number": "2155550100"})
        );
    }

    #[tokio::test]
    async fn test_invalid_offer_is_not_sent() {
        // Arrange
        let received = Received::default();
        let client = testing::serve(router(received.clone())).await;
        let offer = OfferEntity {
            phone_number: "123".to_string(),
            ..offer()
        };

        // Act
        let result = client.create_offer(&offer).await;

        // Assert
        assert!(matches!(result, Err(ClientError::Validation(_))));
        assert!(received.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_destroy_offer() {
        let client = testing::serve(router(Received::default())).await;

        assert!(client.destroy_offer(7).await.is_ok());
        assert_eq!(
            client.destroy_offer(8).await.unwrap_err().status(),
            Some(StatusCode::NOT_FOUND)
        );
    }
}
