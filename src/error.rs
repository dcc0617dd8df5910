//! Error taxonomy shared by the store, the command interpreter and the platform layer.

use std::path::PathBuf;

use crate::database::models::Category;

#[derive(Debug, thiserror::Error)]
pub enum BotError {
    /// Reading or writing a persisted document failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A persisted document is not well-formed JSON for its type.
    #[error("corrupt document {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No stored key matches the user-supplied name, ignoring case.
    #[error("{} `{name}` not found", .category.label())]
    NotFound { category: Category, name: String },

    /// The amount token is missing or not a non-negative integer.
    #[error("invalid amount `{0}`")]
    InvalidAmount(String),

    /// Any failure reported by the chat platform.
    #[error("platform request failed: {0}")]
    Platform(String),
}

impl BotError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn not_found(category: Category, name: impl Into<String>) -> Self {
        Self::NotFound {
            category,
            name: name.into(),
        }
    }

    /// User-facing errors are answered with a reply; everything else is operational.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::InvalidAmount(_))
    }

    /// Reply text for user-facing errors.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound {
                category: Category::Ammo,
                ..
            } => "❌ Ammo type not found.".to_string(),
            Self::NotFound { .. } => "❌ Gun not found.".to_string(),
            Self::InvalidAmount(_) => "❌ Amount must be a whole number.".to_string(),
            _ => "⚠️ Inventory update failed. An admin has been notified.".to_string(),
        }
    }
}

impl From<serenity::Error> for BotError {
    fn from(err: serenity::Error) -> Self {
        Self::Platform(err.to_string())
    }
}

pub type BotResult<T> = Result<T, BotError>;
