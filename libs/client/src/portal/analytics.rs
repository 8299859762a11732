use chrono::NaiveDate;
use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

use super::VOTE_STATISTICS;
use crate::{Client, RequestBody, Response};

pub trait Analytics {
    /// Votes per day plus per-population breakdowns for one poll.
    fn vote_statistics(
        &self,
        poll_id: i64,
    ) -> impl std::future::Future<Output = Response<VoteStatistics>> + Send;
}

#[derive(Deserialize, Debug, Default, PartialEq, Clone)]
pub struct VoteStatistics {
    #[serde(default)]
    pub time_series: Vec<DailyVotes>,
    /// Passed through as the backend shapes it.
    #[serde(default)]
    pub poll_statistics: Vec<Value>,
}

#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct DailyVotes {
    pub date: NaiveDate,
    pub votes: i64,
}

impl VoteStatistics {
    pub fn total_votes(&self) -> i64 {
        self.time_series.iter().map(|day| day.votes).sum()
    }
}

impl Analytics for Client {
    async fn vote_statistics(&self, poll_id: i64) -> Response<VoteStatistics> {
        self.fetch(
            &format!("{}{}", VOTE_STATISTICS, poll_id),
            Method::GET,
            RequestBody::Empty,
        )
        .await
    }
}

#[cfg(test)]
mod test {
    use axum::{routing::get, Json, Router};
    use serde_json::json;

    use super::*;
    use crate::testing;

    #[tokio::test]
    async fn test_vote_statistics() {
        // Arrange
        let router = Router::new().route(
            "/api/portal/vote-statistics/3",
            get(|| async {
                Json(json!({
                    "time_series": [
                        {"date": "2024-03-01", "votes": 4},
                        {"date": "2024-03-02", "votes": 6},
                    ],
                    "poll_statistics": [{"breakdown": {"SCHOOL": {}}}],
                }))
            }),
        );
        let client = testing::serve(router).await;

        // Act
        let statistics = client.vote_statistics(3).await.unwrap();

        // Assert
        assert_eq!(statistics.time_series.len(), 2);
        assert_eq!(
            statistics.time_series[0].date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(statistics.total_votes(), 10);
        assert_eq!(statistics.poll_statistics.len(), 1);
    }
}
