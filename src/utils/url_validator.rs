//! URL 验证模块
//!
//! Links are only accepted with an explicit `http://` or `https://` prefix.
//! The check is a literal, case-sensitive prefix match.

/// URL 验证错误
#[derive(Debug, PartialEq, Eq)]
pub enum UrlValidationError {
    InvalidScheme(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidScheme(_) => write!(f, "{}", SCHEME_ERROR_MESSAGE),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// Message shown on the add form when the scheme check fails.
pub const SCHEME_ERROR_MESSAGE: &str = "URL must start with http:// or https://";

const ALLOWED_PREFIXES: &[&str] = &["http://", "https://"];

/// 空字符串同样按 scheme 不合法处理
pub fn validate_url(url: &str) -> Result<(), UrlValidationError> {
    if ALLOWED_PREFIXES.iter().any(|p| url.starts_with(p)) {
        Ok(())
    } else {
        let scheme = url.split(':').next().unwrap_or_default().to_string();
        Err(UrlValidationError::InvalidScheme(scheme))
    }
}
