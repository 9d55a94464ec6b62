use tracing::info;

use crate::api::dto::{LoginRequest, SignupRequest};
use crate::error::AppError;
use crate::models::User;
use crate::state::AppState;
use crate::store::settings;

#[derive(Debug, Clone)]
pub enum SessionState {
    SignedOut,
    SignedIn(User),
}

impl SessionState {
    pub fn is_signed_in(&self) -> bool {
        matches!(self, SessionState::SignedIn(_))
    }
}

/// Startup bootstrap: a stored token means we try to resume the session. An
/// expired token is cleared and we fall back to signed-out; network errors
/// propagate so the caller can decide.
pub async fn bootstrap(state: &AppState) -> Result<SessionState, AppError> {
    let token = settings::access_token(&state.db).await?;
    if token.is_none() {
        return Ok(SessionState::SignedOut);
    }

    let session = match state.backend.current_user().await {
        Ok(user) => {
            info!("Resumed session for {}", user.email);
            SessionState::SignedIn(user)
        }
        Err(AppError::Unauthorized) => {
            settings::clear_auth(&state.db).await?;
            SessionState::SignedOut
        }
        Err(e) => return Err(e),
    };

    *state.session.write().await = session.clone();
    Ok(session)
}

pub async fn login(state: &AppState, email: &str, password: &str) -> Result<User, AppError> {
    let tokens = state
        .backend
        .login(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await?;
    settings::save_tokens(&state.db, &tokens).await?;

    let user = state.backend.current_user().await?;
    *state.session.write().await = SessionState::SignedIn(user.clone());
    Ok(user)
}

pub async fn signup(state: &AppState, req: SignupRequest) -> Result<User, AppError> {
    let tokens = state.backend.signup(&req).await?;
    settings::save_tokens(&state.db, &tokens).await?;

    let user = state.backend.current_user().await?;
    *state.session.write().await = SessionState::SignedIn(user.clone());
    Ok(user)
}

/// Sign-out teardown: tokens and the pending-mentor handoff are dropped.
/// Poller shutdown is the caller's job; their handles live with the shell.
pub async fn sign_out(state: &AppState) -> Result<(), AppError> {
    settings::clear_auth(&state.db).await?;
    *state.session.write().await = SessionState::SignedOut;
    Ok(())
}
