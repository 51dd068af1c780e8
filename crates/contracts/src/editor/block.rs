use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Block variant. Serialized lowercase as the backend stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Text,
    Image,
    Button,
    Divider,
    Heading,
    Spacer,
}

impl BlockKind {
    /// Palette order in the builder sidebar.
    pub const ALL: [BlockKind; 6] = [
        BlockKind::Heading,
        BlockKind::Text,
        BlockKind::Image,
        BlockKind::Button,
        BlockKind::Divider,
        BlockKind::Spacer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BlockKind::Text => "text",
            BlockKind::Image => "image",
            BlockKind::Button => "button",
            BlockKind::Divider => "divider",
            BlockKind::Heading => "heading",
            BlockKind::Spacer => "spacer",
        }
    }
}

/// Per-block style overrides. Unset fields fall back to global styles, then
/// to the generator's hard-coded defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BlockStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
}

/// One typed, styled unit of email content. Ids are unique within an
/// editing session and serve as the drag/reorder key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<BlockStyle>,
}

impl ContentBlock {
    /// A fresh block with type-appropriate placeholder content and the
    /// builder's default spacing.
    pub fn new(kind: BlockKind) -> Self {
        let content = match kind {
            BlockKind::Divider => String::new(),
            _ => format!("New {}", kind.label()),
        };
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            content,
            style: Some(BlockStyle {
                padding: Some("16px".to_string()),
                margin: Some("8px 0".to_string()),
                ..BlockStyle::default()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_block_defaults() {
        let b = ContentBlock::new(BlockKind::Heading);
        assert_eq!(b.content, "New heading");
        let style = b.style.unwrap();
        assert_eq!(style.padding.as_deref(), Some("16px"));
        assert_eq!(style.margin.as_deref(), Some("8px 0"));
        assert!(style.background_color.is_none());
    }

    #[test]
    fn test_divider_starts_empty() {
        assert_eq!(ContentBlock::new(BlockKind::Divider).content, "");
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let b = ContentBlock::new(BlockKind::Button);
        let json = serde_json::to_value(&b).unwrap();
        assert_eq!(json["type"], "button");
    }

    #[test]
    fn test_unset_style_fields_are_omitted() {
        let b = ContentBlock::new(BlockKind::Text);
        let json = serde_json::to_value(&b).unwrap();
        let style = &json["style"];
        assert!(style.get("backgroundColor").is_none());
        assert_eq!(style["padding"], "16px");
    }
}
