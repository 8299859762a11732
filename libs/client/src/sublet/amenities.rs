use reqwest::Method;

use super::LIST_AMENITIES;
use crate::{Client, RequestBody, Response};

pub trait Amenities {
    fn list_amenities(
        &self,
    ) -> impl std::future::Future<Output = Response<Vec<String>>> + Send;
}

impl Amenities for Client {
    async fn list_amenities(&self) -> Response<Vec<String>> {
        self.fetch(LIST_AMENITIES, Method::GET, RequestBody::Empty)
            .await
    }
}
