use std::sync::Arc;

use reqwest::{
    cookie::{CookieStore as _, Jar},
    header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT},
};
use toml::{map::Map, Value};
use url::Url;

mod csrf;
mod datetime;
mod error;
pub mod portal;
mod request;
pub mod sublet;
#[cfg(test)]
mod testing;

pub use csrf::{csrf_token, CSRF_HEADER};
pub use error::{ClientError, IntoResponse, OptionSyncFailure, Response};
pub use request::{Image, RequestBody};

/// HTTP client for one backend origin. Carries the session cookie jar, so
/// clones share credentials.
#[derive(Clone, Debug)]
pub struct Client {
    base_url: Url,
    csrf_cookie: String,
    basic_auth: Option<BasicAuth>,
    jar: Arc<Jar>,
    http: reqwest::Client,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub csrf_cookie: String,
    pub basic_auth: Option<BasicAuth>,
}

#[derive(Clone, PartialEq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl ClientConfig {
    /// Reads `base_url` and `csrf_cookie` from `[section]` of a parsed
    /// `Config.toml`.
    pub fn from_toml(
        config: &Map<String, Value>,
        section: &str,
    ) -> Response<Self> {
        let table = config
            .get(section)
            .into_response(&format!("failed to load {} config", section))?;

        let base_url = table
            .get("base_url")
            .and_then(Value::as_str)
            .into_response("failed to load base_url config")?
            .to_string();

        let csrf_cookie = table
            .get("csrf_cookie")
            .and_then(Value::as_str)
            .unwrap_or("csrftoken")
            .to_string();

        Ok(Self {
            base_url,
            csrf_cookie,
            basic_auth: None,
        })
    }

    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.basic_auth = Some(BasicAuth {
            username: username.into(),
            password: password.into(),
        });
        self
    }
}

impl Client {
    pub fn new(config: ClientConfig) -> Response<Self> {
        let mut base_url = config.base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base_url =
            Url::parse(&base_url).into_response("failed to parse base_url")?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("portal-client"));

        let jar = Arc::new(Jar::default());
        let http = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .cookie_provider(jar.clone())
            .build()
            .into_response("failed to build http client")?;

        Ok(Self {
            base_url,
            csrf_cookie: config.csrf_cookie,
            basic_auth: config.basic_auth,
            jar,
            http,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Stores a `Set-Cookie` style string for this origin, e.g. a session
    /// handed over from a browser.
    pub fn add_cookie(&self, cookie: &str) {
        self.jar.add_cookie_str(cookie, &self.base_url);
    }

    /// CSRF token currently held in the cookie jar, or `""`.
    pub fn csrf_token(&self) -> String {
        self.jar
            .cookies(&self.base_url)
            .and_then(|header| header.to_str().map(str::to_string).ok())
            .map(|cookies| csrf_token(&cookies, &self.csrf_cookie))
            .unwrap_or_default()
    }

    fn url(&self, path: &str) -> Response<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .into_response("failed to build request url")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn config() -> ClientConfig {
        ClientConfig {
            base_url: "http://localhost:8000/backend".to_string(),
            csrf_cookie: "csrftoken".to_string(),
            basic_auth: None,
        }
    }

    #[test]
    fn test_url_keeps_base_path() {
        let client = Client::new(config()).unwrap();

        let url = client.url("/api/portal/posts/").unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:8000/backend/api/portal/posts/"
        );
    }

    #[test]
    fn test_csrf_token_from_jar() {
        // Arrange
        let client = Client::new(config()).unwrap();
        assert_eq!(client.csrf_token(), "");

        // Act
        client.add_cookie("csrftoken=abc%3Ddef; Path=/");

        // Assert
        assert_eq!(client.csrf_token(), "abc=def");
    }

    #[test]
    fn test_config_from_toml() {
        // Arrange
        let config = toml::from_str::<Map<String, Value>>(
            r#"
            [sublet]
            base_url = "https://sublet.pennlabs.org"
            csrf_cookie = "csrfToken"

            [portal]
            base_url = "https://portal.pennmobile.org"
            "#,
        )
        .unwrap();

        // Act
        let sublet = ClientConfig::from_toml(&config, "sublet")
            .unwrap()
            .with_basic_auth("svc", "secret");
        let portal = ClientConfig::from_toml(&config, "portal").unwrap();

        // Assert
        assert_eq!(sublet.csrf_cookie, "csrfToken");
        assert_eq!(sublet.basic_auth.as_ref().unwrap().username, "svc");
        assert!(!format!("{:?}", sublet).contains("secret"));
        assert_eq!(portal.csrf_cookie, "csrftoken");
        assert!(ClientConfig::from_toml(&config, "missing").is_err());
    }
}
