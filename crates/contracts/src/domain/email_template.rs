use serde::{Deserialize, Serialize};

use crate::editor::block::ContentBlock;
use crate::editor::global_styles::GlobalStyles;

/// Reusable email template managed at `/api/admin/email-templates`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EmailTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content_html: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_blocks: Option<Vec<ContentBlock>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_styles: Option<GlobalStyles>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub created_by: String,
}

impl EmailTemplate {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Template name is required".into());
        }
        if self.slug.trim().is_empty() {
            return Err("Template slug is required".into());
        }
        Ok(())
    }
}
