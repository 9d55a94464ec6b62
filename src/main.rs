use std::sync::Arc;
use std::time::Duration;

use sqlx::sqlite::SqlitePoolOptions;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mentorlink_client::ai;
use mentorlink_client::api::{BackendConfig, HttpBackendClient};
use mentorlink_client::auth::{self, SessionState};
use mentorlink_client::config::AppConfig;
use mentorlink_client::models::Role;
use mentorlink_client::services::{NotificationService, RosterService, poller};
use mentorlink_client::state::AppState;
use mentorlink_client::store::theme;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "mentorlink_client=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let backend = Arc::new(HttpBackendClient::new(
        BackendConfig::new(&config.api_base),
        pool.clone(),
    )?);
    let ai = ai::client_from_config(&config.ai);

    let state = AppState::new(pool.clone(), backend, ai);
    *state.theme.write().await = theme::load(&pool).await?;

    let session = match auth::bootstrap(&state).await {
        Ok(session) => session,
        Err(e) => {
            warn!("Session bootstrap failed: {}", e);
            SessionState::SignedOut
        }
    };

    let mut pollers = Vec::new();

    if let SessionState::SignedIn(user) = &session {
        info!("Signed in as {} ({:?})", user.name, user.role);

        let notif_state = state.clone();
        pollers.push(poller::spawn(
            "notification",
            Duration::from_secs(config.notification_poll_secs),
            move || {
                let state = notif_state.clone();
                async move {
                    if !state.session.read().await.is_signed_in() {
                        return Ok(());
                    }
                    let service =
                        NotificationService::new(state.backend.clone(), state.notifications.clone());
                    service.refresh().await.map(|_| ())
                }
            },
        ));

        if user.role == Role::Mentor {
            let roster_state = state.clone();
            pollers.push(poller::spawn(
                "roster",
                Duration::from_secs(config.roster_poll_secs),
                move || {
                    let state = roster_state.clone();
                    async move {
                        let service =
                            RosterService::new(state.backend.clone(), state.roster.clone());
                        service.refresh().await.map(|_| ())
                    }
                },
            ));
        }
    } else {
        info!("No stored session, starting signed out");
    }

    tokio::signal::ctrl_c().await?;
    info!("Shutting down");

    for handle in pollers {
        handle.shutdown().await;
    }

    Ok(())
}
