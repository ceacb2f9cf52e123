//! Link form handling shared by the web pages and the CLI.

use serde::{Deserialize, Serialize};

use crate::errors::WeblinksError;
use crate::storage::{Link, NewLink};
use crate::utils::validate_url;

/// URL-encoded body of the add and edit forms. Missing fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkForm {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub file_group: String,
}

impl LinkForm {
    /// Validate the URL scheme and convert for `LinkStore::create`.
    pub fn validated(self) -> Result<NewLink, WeblinksError> {
        validate_url(&self.url).map_err(|e| WeblinksError::validation(e.to_string()))?;
        Ok(self.into_new_link())
    }

    /// Convert without validation. Tags are stored exactly as submitted.
    pub fn into_new_link(self) -> NewLink {
        NewLink {
            description: self.description,
            tags: Some(self.tags),
            url: self.url,
            file_group: self.file_group,
        }
    }
}

impl From<&Link> for LinkForm {
    fn from(link: &Link) -> Self {
        Self {
            description: link.description.clone(),
            tags: link.tags.clone().unwrap_or_default(),
            url: link.url.clone(),
            file_group: link.file_group.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(url: &str) -> LinkForm {
        LinkForm {
            description: "Go docs".to_string(),
            tags: "lang,reference".to_string(),
            url: url.to_string(),
            file_group: "dev".to_string(),
        }
    }

    #[test]
    fn test_validated_accepts_https() {
        let new_link = form("https://go.dev").validated().unwrap();
        assert_eq!(new_link.url, "https://go.dev");
        assert_eq!(new_link.tags.as_deref(), Some("lang,reference"));
    }

    #[test]
    fn test_validated_rejects_other_schemes() {
        let err = form("ftp://go.dev").validated().unwrap_err();
        assert!(matches!(err, WeblinksError::Validation(_)));
        assert_eq!(err.message(), "URL must start with http:// or https://");
    }

    #[test]
    fn test_form_from_link_without_tags() {
        let link = Link {
            id: 3,
            description: "d".to_string(),
            tags: None,
            url: "https://x.test".to_string(),
            file_group: "g".to_string(),
        };
        assert_eq!(LinkForm::from(&link).tags, "");
    }
}
