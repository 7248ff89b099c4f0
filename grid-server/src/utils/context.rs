//! Render context from query parameters

use serde::Deserialize;
use shared::{AppError, AppResult, ErrorCode, Language, RenderContext, UserRole};

/// `?lang=&role=` shared by every view endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContextQuery {
    pub lang: Option<String>,
    pub role: Option<String>,
}

impl ContextQuery {
    /// Unknown languages fall back to English; an unknown role is rejected.
    pub fn render_context(&self) -> AppResult<RenderContext> {
        let language = match self.lang.as_deref() {
            Some(raw) => raw.parse::<Language>().unwrap_or_else(|e| {
                tracing::debug!(error = %e, "Falling back to default language");
                Language::default()
            }),
            None => Language::default(),
        };

        let role = match self.role.as_deref() {
            Some(raw) => raw.parse::<UserRole>().map_err(|e| {
                AppError::with_message(ErrorCode::InvalidRequest, e).with_detail("field", "role")
            })?,
            None => UserRole::default(),
        };

        Ok(RenderContext::new(language, role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(lang: Option<&str>, role: Option<&str>) -> ContextQuery {
        ContextQuery {
            lang: lang.map(Into::into),
            role: role.map(Into::into),
        }
    }

    #[test]
    fn test_defaults() {
        let ctx = query(None, None).render_context().unwrap();
        assert_eq!(ctx, RenderContext::new(Language::En, UserRole::Viewer));
    }

    #[test]
    fn test_lang_falls_back_role_rejects() {
        let ctx = query(Some("fr"), Some("staff")).render_context().unwrap();
        assert_eq!(ctx.language, Language::En);
        assert_eq!(ctx.role, UserRole::Staff);

        let err = query(Some("zh-CN"), Some("owner")).render_context().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRequest);
    }
}
