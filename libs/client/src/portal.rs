//! Admin portal endpoints under `/api/portal/`, plus account endpoints.

pub mod analytics;
pub mod auth;
pub mod polls;
pub mod populations;
pub mod posts;

static POSTS: &str = "api/portal/posts/";
static POLLS: &str = "api/portal/polls/";
static OPTIONS: &str = "api/portal/options/";
static POPULATIONS: &str = "api/portal/populations/";
static VOTE_STATISTICS: &str = "api/portal/vote-statistics/";
static ME: &str = "api/users/me/";
static LOGIN: &str = "api/accounts/login/";
static LOGOUT: &str = "api/accounts/logout/";
