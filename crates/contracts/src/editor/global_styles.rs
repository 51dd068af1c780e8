use serde::{Deserialize, Serialize};

/// Campaign-wide style defaults. Blocks that set the same property in their
/// own style win over these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStyles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
}

impl GlobalStyles {
    /// What a freshly opened editor starts with.
    pub fn editor_default() -> Self {
        Self {
            primary_color: Some("#3b82f6".into()),
            secondary_color: Some("#10b981".into()),
            font_family: Some("Arial, sans-serif".into()),
            font_size: Some("16px".into()),
            ..Self::default()
        }
    }

    pub const PRESET_NAMES: [&'static str; 3] = ["modern", "minimal", "vibrant"];

    /// Named preset from the styles panel, if it exists.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "modern" => Some(Self {
                primary_color: Some("#3b82f6".into()),
                secondary_color: Some("#10b981".into()),
                accent_color: Some("#f59e0b".into()),
                background_color: Some("#ffffff".into()),
                text_color: Some("#1f2937".into()),
                font_family: Some("\"Segoe UI\", Tahoma, Geneva, Verdana, sans-serif".into()),
                font_size: Some("16px".into()),
                line_height: Some("1.6".into()),
                border_radius: Some("8px".into()),
                padding: Some("16px".into()),
                margin: Some("8px".into()),
            }),
            "minimal" => Some(Self {
                primary_color: Some("#000000".into()),
                secondary_color: Some("#666666".into()),
                accent_color: Some("#cccccc".into()),
                background_color: Some("#ffffff".into()),
                text_color: Some("#333333".into()),
                font_family: Some("Arial, sans-serif".into()),
                font_size: Some("14px".into()),
                line_height: Some("1.5".into()),
                border_radius: Some("0px".into()),
                padding: Some("12px".into()),
                margin: Some("4px".into()),
            }),
            "vibrant" => Some(Self {
                primary_color: Some("#ff006e".into()),
                secondary_color: Some("#8338ec".into()),
                accent_color: Some("#ffbe0b".into()),
                background_color: Some("#ffffff".into()),
                text_color: Some("#2a2a2a".into()),
                font_family: Some("\"Trebuchet MS\", sans-serif".into()),
                font_size: Some("16px".into()),
                line_height: Some("1.7".into()),
                border_radius: Some("12px".into()),
                padding: Some("20px".into()),
                margin: Some("12px".into()),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_named_preset_exists() {
        for name in GlobalStyles::PRESET_NAMES {
            assert!(GlobalStyles::preset(name).is_some(), "missing preset {name}");
        }
        assert!(GlobalStyles::preset("neon").is_none());
    }

    #[test]
    fn test_camel_case_wire_shape() {
        let styles = GlobalStyles::editor_default();
        let json = serde_json::to_value(&styles).unwrap();
        assert_eq!(json["primaryColor"], "#3b82f6");
        assert_eq!(json["fontFamily"], "Arial, sans-serif");
        assert!(json.get("accentColor").is_none());
    }
}
