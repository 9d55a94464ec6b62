use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::AuthTokens;

/// Well-known settings keys. The settings table is the client's persistent
/// key-value store: auth tokens, theme, and the pending-mentor handoff
/// written during mentor signup.
pub const ACCESS_TOKEN: &str = "access_token";
pub const REFRESH_TOKEN: &str = "refresh_token";
pub const PENDING_MENTOR: &str = "pending_mentor";
pub const THEME: &str = "theme";

pub async fn get(db: &SqlitePool, key: &str) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT value FROM settings WHERE key = ?")
        .bind(key)
        .fetch_optional(db)
        .await
}

pub async fn set(db: &SqlitePool, key: &str, value: &str) -> Result<(), sqlx::Error> {
    let now = Utc::now().to_rfc3339();
    sqlx::query(
        r#"
        INSERT INTO settings (key, value, updated_at)
        VALUES (?, ?, ?)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
        "#,
    )
    .bind(key)
    .bind(value)
    .bind(now)
    .execute(db)
    .await?;

    Ok(())
}

pub async fn delete(db: &SqlitePool, key: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM settings WHERE key = ?")
        .bind(key)
        .execute(db)
        .await?;

    Ok(())
}

pub async fn save_tokens(db: &SqlitePool, tokens: &AuthTokens) -> Result<(), sqlx::Error> {
    set(db, ACCESS_TOKEN, &tokens.access_token).await?;
    set(db, REFRESH_TOKEN, &tokens.refresh_token).await?;
    Ok(())
}

pub async fn access_token(db: &SqlitePool) -> Result<Option<String>, sqlx::Error> {
    get(db, ACCESS_TOKEN).await
}

/// Sign-out teardown: drop tokens and the mentor-signup handoff value.
pub async fn clear_auth(db: &SqlitePool) -> Result<(), sqlx::Error> {
    delete(db, ACCESS_TOKEN).await?;
    delete(db, REFRESH_TOKEN).await?;
    delete(db, PENDING_MENTOR).await?;
    Ok(())
}
