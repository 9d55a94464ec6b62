use sqlx::SqlitePool;

use crate::store::settings;

/// Color scheme preference. The rendering shell mirrors this onto the
/// document root; this side only owns the persisted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn from_str(value: &str) -> Theme {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn flipped(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub async fn load(db: &SqlitePool) -> Result<Theme, sqlx::Error> {
    Ok(settings::get(db, settings::THEME)
        .await?
        .map(|v| Theme::from_str(&v))
        .unwrap_or_default())
}

/// Flip the stored preference and return the new value.
pub async fn toggle(db: &SqlitePool) -> Result<Theme, sqlx::Error> {
    let next = load(db).await?.flipped();
    settings::set(db, settings::THEME, next.as_str()).await?;
    Ok(next)
}
