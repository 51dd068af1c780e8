use serde::{Deserialize, Serialize};

use super::block::ContentBlock;
use super::global_styles::GlobalStyles;

/// The aggregate the editor serializes on save and auto-save: campaign
/// metadata, the raw HTML body, and optionally the structured blocks plus
/// global styles the HTML was generated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EditorData {
    pub title: String,
    pub subject_line: String,
    pub from_name: String,
    pub from_email: String,
    pub reply_to_email: String,
    pub content_html: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_blocks: Option<Vec<ContentBlock>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_styles: Option<GlobalStyles>,
}

impl EditorData {
    /// Required-field check mirrored by the form's `required` attributes.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Campaign title is required".into());
        }
        if self.subject_line.trim().is_empty() {
            return Err("Subject line is required".into());
        }
        if self.from_name.trim().is_empty() {
            return Err("From name is required".into());
        }
        if self.from_email.trim().is_empty() {
            return Err("From email is required".into());
        }
        if self.reply_to_email.trim().is_empty() {
            return Err("Reply-to email is required".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EditorData {
        EditorData {
            title: "Spring issue".into(),
            subject_line: "What's on this spring".into(),
            from_name: "ARTbeat Team".into(),
            from_email: "noreply@artbeat.local".into(),
            reply_to_email: "support@artbeat.local".into(),
            content_html: "<p>hello</p>".into(),
            content_blocks: None,
            global_styles: None,
        }
    }

    #[test]
    fn test_validate_accepts_filled_form() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_subject() {
        let mut data = filled();
        data.subject_line = "  ".into();
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_optional_sections_are_omitted_from_wire() {
        let json = serde_json::to_value(filled()).unwrap();
        assert!(json.get("content_blocks").is_none());
        assert!(json.get("global_styles").is_none());
    }
}
