use entity::prelude::*;
use reqwest::Method;
use serde::Deserialize;

use super::POPULATIONS;
use crate::{Client, RequestBody, Response};

pub trait Populations {
    fn list_populations(
        &self,
    ) -> impl std::future::Future<Output = Response<Vec<PopulationEntity>>> + Send;
}

#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct PopulationResponse {
    pub id: i64,
    pub kind: String,
    pub population: String,
}

impl From<PopulationResponse> for PopulationEntity {
    fn from(value: PopulationResponse) -> Self {
        Self {
            id: value.id,
            kind: value.kind,
            population: value.population,
        }
    }
}

impl Populations for Client {
    async fn list_populations(&self) -> Response<Vec<PopulationEntity>> {
        let populations: Vec<PopulationResponse> = self
            .fetch(POPULATIONS, Method::GET, RequestBody::Empty)
            .await?;

        Ok(populations.into_iter().map(Into::into).collect())
    }
}
