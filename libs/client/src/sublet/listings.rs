pub mod implementation;

use chrono::{DateTime, NaiveDate, Utc};
use entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use crate::{Image, Response};

pub trait Listings {
    fn list_sublets(
        &self,
    ) -> impl std::future::Future<Output = Response<Vec<SubletEntity>>> + Send;
    fn create_sublet(
        &self,
        sublet: &SubletEntity,
    ) -> impl std::future::Future<Output = Response<SubletEntity>> + Send;
    fn update_sublet(
        &self,
        sublet: &SubletEntity,
    ) -> impl std::future::Future<Output = Response<SubletEntity>> + Send;
    fn destroy_sublet(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Response<()>> + Send;
    /// Uploads photos for an existing listing in one multipart request.
    fn create_sublet_images(
        &self,
        id: i64,
        images: Vec<Image>,
    ) -> impl std::future::Future<Output = Response<()>> + Send;
}

/// Decimals arrive either as JSON numbers or as strings like `"950.50"`.
#[serde_as]
#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct SubletResponse {
    pub id: i64,
    pub subletter: i64,
    pub title: String,
    pub address: Option<String>,
    pub beds: Option<u32>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub baths: Option<f32>,
    pub description: Option<String>,
    pub external_link: Option<String>,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub price: f64,
    #[serde(default)]
    pub negotiable: bool,
    #[serde(default, with = "crate::datetime::lenient_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, with = "crate::datetime::lenient_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, with = "crate::datetime::lenient")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub images: Vec<SubletImageResponse>,
    #[serde(default)]
    pub pending: bool,
}

#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct SubletImageResponse {
    pub id: i64,
    pub image_url: String,
}

/// Body of both create and update. The owner is taken from the session.
/// Unset optional fields are sent as `null` so an update can clear them.
#[derive(Serialize, Debug, PartialEq, Clone)]
pub struct SubletRequest {
    pub title: String,
    pub address: Option<String>,
    pub beds: Option<u32>,
    pub baths: Option<f32>,
    pub description: Option<String>,
    pub external_link: Option<String>,
    /// Fixed two decimals.
    pub price: String,
    pub negotiable: bool,
    #[serde(with = "crate::datetime::lenient_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(with = "crate::datetime::lenient_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(with = "crate::datetime::lenient")]
    pub expires_at: Option<DateTime<Utc>>,
    pub amenities: Vec<String>,
}

impl From<SubletImageResponse> for SubletImageEntity {
    fn from(value: SubletImageResponse) -> Self {
        Self {
            id: value.id,
            image_url: value.image_url,
        }
    }
}

impl From<SubletResponse> for SubletEntity {
    fn from(value: SubletResponse) -> Self {
        Self {
            id: Some(value.id),
            subletter: value.subletter,
            title: value.title,
            address: value.address,
            beds: value.beds,
            baths: value.baths,
            description: value.description,
            external_link: value.external_link,
            price: value.price,
            negotiable: value.negotiable,
            start_date: value.start_date,
            end_date: value.end_date,
            expires_at: value.expires_at,
            amenities: value.amenities,
            images: value.images.into_iter().map(Into::into).collect(),
            pending: value.pending,
        }
    }
}

impl From<&SubletEntity> for SubletRequest {
    fn from(value: &SubletEntity) -> Self {
        Self {
            title: value.title.clone(),
            address: value.address.clone(),
            beds: value.beds,
            baths: value.baths,
            description: value.description.clone(),
            external_link: value.external_link.clone(),
            price: format!("{:.2}", value.price),
            negotiable: value.negotiable,
            start_date: value.start_date,
            end_date: value.end_date,
            expires_at: value.expires_at,
            amenities: value.amenities.clone(),
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_decimals_as_strings_or_numbers() {
        // Arrange
        let raw = json!({
            "id": 7,
            "subletter": 42,
            "title": "Room near Locust",
            "address": null,
            "beds": 2,
            "baths": "1.5",
            "description": null,
            "external_link": null,
            "price": "950.50",
            "start_date": "2024-05-15",
            "end_date": "2024-08-15",
            "expires_at": "2024-05-01T00:00:00Z",
        });

        // Act
        let sublet: SubletEntity =
            serde_json::from_value::<SubletResponse>(raw).unwrap().into();

        // Assert
        assert_eq!(sublet.baths, Some(1.5));
        assert_eq!(sublet.price, 950.5);
        assert!(sublet.images.is_empty());

        let numeric: SubletResponse = serde_json::from_value(json!({
            "id": 8,
            "subletter": 42,
            "title": "Studio",
            "price": 1200,
            "start_date": "2024-05-15",
            "end_date": "2024-08-15",
            "expires_at": "2024-05-01T00:00:00Z",
        }))
        .unwrap();
        assert_eq!(numeric.price, 1200.0);
        assert_eq!(numeric.baths, None);
    }

    #[test]
    fn test_request_formats_price() {
        let sublet = SubletEntity {
            title: "Studio".to_string(),
            price: 0.1 + 0.2,
            ..Default::default()
        };

        let value = serde_json::to_value(SubletRequest::from(&sublet)).unwrap();

        assert_eq!(value["price"], "0.30");
        assert!(value["address"].is_null());
    }

    #[test]
    fn test_unusable_dates_become_absent() {
        let sublet: SubletEntity = serde_json::from_value::<SubletResponse>(json!({
            "id": 9,
            "subletter": 42,
            "title": "Loft",
            "price": "800.00",
            "start_date": "",
            "end_date": "2024-08-15T00:00:00Z",
            "expires_at": null,
        }))
        .unwrap()
        .into();

        assert_eq!(sublet.start_date, None);
        assert_eq!(sublet.end_date, NaiveDate::from_ymd_opt(2024, 8, 15));
        assert_eq!(sublet.expires_at, None);
    }
}
