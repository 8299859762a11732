use chrono::{DateTime, Utc};
use validator::Validate;

use crate::{content::impl_content, schedule::validate_schedule, status::Status};

/// A promotional card shown in the campus app.
#[derive(Debug, Default, PartialEq, Clone, Validate)]
#[validate(schema(function = "validate_post_schedule"))]
pub struct Post {
    pub id: Option<i64>,
    pub club_code: String,
    #[validate(length(min = 1, max = 255, message = "title is required"))]
    pub title: String,
    #[validate(length(max = 255))]
    pub subtitle: String,
    #[validate(url(message = "post url must be a valid url"))]
    pub post_url: Option<String>,
    #[validate(url(message = "image url must be a valid url"))]
    pub image_url: Option<String>,
    pub status: Status,
    pub start_date: Option<DateTime<Utc>>,
    pub expire_date: Option<DateTime<Utc>>,
    /// Empty means every user.
    pub target_populations: Vec<i64>,
    pub club_comment: Option<String>,
    pub admin_comment: Option<String>,
}

impl_content!(Post);

fn validate_post_schedule(
    post: &Post,
) -> Result<(), validator::ValidationError> {
    validate_schedule(post.start_date, post.expire_date)
}

#[cfg(test)]
mod test {
    use chrono::TimeZone;

    use super::*;
    use crate::content::Content;

    fn post() -> Post {
        Post {
            club_code: "pennlabs".to_string(),
            title: "Spring fling".to_string(),
            post_url: Some("https://pennlabs.org/fling".to_string()),
            start_date: Some(Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap()),
            expire_date: Some(
                Utc.with_ymd_and_hms(2024, 4, 20, 0, 0, 0).unwrap(),
            ),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_post() {
        assert!(post().validate().is_ok());
    }

    #[test]
    fn test_rejects_malformed_url_and_empty_title() {
        // Arrange
        let post = Post {
            title: String::new(),
            post_url: Some("not a url".to_string()),
            ..post()
        };

        // Act
        let errors = post.validate().unwrap_err();

        // Assert
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("post_url"));
    }

    #[test]
    fn test_rejects_expiry_before_start() {
        let post = Post {
            expire_date: Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
            ..post()
        };

        assert!(post.validate().is_err());
    }

    #[test]
    fn test_content_dates() {
        // Arrange
        let post = post();
        let during = Utc.with_ymd_and_hms(2024, 4, 10, 0, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();

        // Assert
        assert!(post.has_started_at(during));
        assert!(!post.is_expired_at(during));
        assert!(post.is_expired_at(after));
        assert!(!Post::default().is_expired_at(after));
        assert!(!Post::default().has_started_at(after));
    }
}
