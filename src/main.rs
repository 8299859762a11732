use anyhow::Context;
use chrono::Utc;
use client::{
    portal::{auth::Auth, polls::Polls, populations::Populations, posts::Posts},
    sublet::listings::Listings,
    Client, ClientConfig,
};
use dashboard::{describe_targets, label_color, Column, Dashboard};
use strum::IntoEnumIterator;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = util::load_config("Config.toml")?;
    let secrets = util::load_env()?;

    let portal = Client::new(ClientConfig::from_toml(&config, "portal")?)?;
    portal
        .login(
            util::require_str(&secrets, "PORTAL_USERNAME")?,
            util::require_str(&secrets, "PORTAL_PASSWORD")?,
        )
        .await
        .context("failed to log in to the portal")?;

    let auth = portal.auth_context().await?;
    let Some(user) = auth.user() else {
        anyhow::bail!("portal session was not accepted");
    };
    info!(task = "auth", user = user.display_name());

    let (posts, polls, populations) = tokio::try_join!(
        portal.list_posts(),
        portal.list_polls(),
        portal.list_populations(),
    )?;

    let dashboard = Dashboard::build(posts, polls, Utc::now());
    for column in Column::iter() {
        info!(
            task = "dashboard",
            column = column.to_string(),
            posts = dashboard.posts.column(column).len(),
            polls = dashboard.polls.column(column).len(),
        );
    }
    for post in dashboard.posts.column(Column::Approved) {
        info!(
            task = "dashboard",
            title = post.title,
            status = post.status.to_string(),
            audience = describe_targets(&post.target_populations, &populations),
            color = label_color(&post.club_code),
        );
    }

    let sublet_config = ClientConfig::from_toml(&config, "sublet")?
        .with_basic_auth(
            util::require_str(&secrets, "SUBLET_USERNAME")?,
            util::require_str(&secrets, "SUBLET_PASSWORD")?,
        );
    let sublets = Client::new(sublet_config)?;

    match sublets.list_sublets().await {
        Ok(listings) => {
            let now = Utc::now();
            for listing in listings {
                info!(
                    task = "sublets",
                    title = listing.title,
                    state = listing.state(now).to_string(),
                    owned = listing.is_owned_by(&auth),
                );
            }
        }
        Err(e) => warn!(task = "sublets", error = e.to_string()),
    }

    portal.logout().await?;
    Ok(())
}
