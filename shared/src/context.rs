//! Render context
//!
//! Language and role are passed explicitly into every rendering function
//! instead of living in ambient singletons.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Dashboard language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Zh,
}

impl FromStr for Language {
    type Err = String;

    /// Accepts `en`, `es`, `zh` and region-tagged variants such as `es-ES`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            "zh" => Ok(Self::Zh),
            _ => Err(format!("unsupported language: {}", s)),
        }
    }
}

/// Role of the current back-office user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
    Staff,
    #[default]
    Viewer,
}

impl UserRole {
    /// Whether the role may trigger seat / leave / no-show transitions
    pub fn can_update_reservations(&self) -> bool {
        !matches!(self, Self::Viewer)
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "staff" => Ok(Self::Staff),
            "viewer" => Ok(Self::Viewer),
            _ => Err(format!("unknown role: {}", s)),
        }
    }
}

/// Explicit configuration for a render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderContext {
    pub language: Language,
    pub role: UserRole,
}

impl RenderContext {
    pub fn new(language: Language, role: UserRole) -> Self {
        Self { language, role }
    }
}
