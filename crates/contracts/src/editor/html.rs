//! Deterministic block-list → email HTML rendering.
//!
//! The output is a single table, one row per block, with all styling
//! inlined so it survives email clients. Same blocks + same global styles
//! always produce the same string.

use super::block::{BlockKind, ContentBlock};
use super::global_styles::GlobalStyles;

const FALLBACK_PADDING: &str = "16px";
const FALLBACK_MARGIN: &str = "8px 0";
const FALLBACK_BACKGROUND: &str = "transparent";
const FALLBACK_TEXT_COLOR: &str = "#000";
const FALLBACK_FONT_SIZE: &str = "16px";
const FALLBACK_ALIGNMENT: &str = "left";
const FALLBACK_FONT_FAMILY: &str = "Arial";
const FALLBACK_PRIMARY_COLOR: &str = "#3b82f6";
const FALLBACK_SPACER_HEIGHT: u32 = 32;

/// Entity-escape `&<>"'` in user-supplied text content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Spacer content is a pixel height; tolerate suffixes like "40px" and
/// fall back to 32 when nothing numeric leads the string.
pub fn spacer_height(content: &str) -> u32 {
    let digits: String = content
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(FALLBACK_SPACER_HEIGHT)
}

/// Render the ordered block list into an email-ready HTML string.
/// An empty list renders to an empty string, no table wrapper.
pub fn render_email_html(blocks: &[ContentBlock], global: &GlobalStyles) -> String {
    if blocks.is_empty() {
        return String::new();
    }

    let font_family = global.font_family.as_deref().unwrap_or(FALLBACK_FONT_FAMILY);
    let primary_color = global
        .primary_color
        .as_deref()
        .unwrap_or(FALLBACK_PRIMARY_COLOR);

    let mut html = format!("<table style=\"width: 100%; font-family: {};\">", font_family);

    for block in blocks {
        html.push_str("<tr><td style=\"");
        html.push_str(&cell_style(block, global));
        html.push_str("\">");
        html.push_str(&block_body(block, primary_color));
        html.push_str("</td></tr>");
    }

    html.push_str("</table>");
    html
}

/// Inline style for one cell: block style wins over global styles, which
/// win over the hard-coded fallbacks. Property order is fixed.
fn cell_style(block: &ContentBlock, global: &GlobalStyles) -> String {
    let style = block.style.as_ref();
    let pick = |block_value: Option<&String>, global_value: Option<&String>, fallback: &str| {
        block_value
            .or(global_value)
            .map(String::as_str)
            .unwrap_or(fallback)
            .to_string()
    };

    let padding = pick(
        style.and_then(|s| s.padding.as_ref()),
        global.padding.as_ref(),
        FALLBACK_PADDING,
    );
    let margin = pick(
        style.and_then(|s| s.margin.as_ref()),
        global.margin.as_ref(),
        FALLBACK_MARGIN,
    );
    let background = pick(
        style.and_then(|s| s.background_color.as_ref()),
        global.background_color.as_ref(),
        FALLBACK_BACKGROUND,
    );
    let color = pick(
        style.and_then(|s| s.text_color.as_ref()),
        global.text_color.as_ref(),
        FALLBACK_TEXT_COLOR,
    );
    let font_size = pick(
        style.and_then(|s| s.font_size.as_ref()),
        global.font_size.as_ref(),
        FALLBACK_FONT_SIZE,
    );
    let alignment = style
        .and_then(|s| s.alignment.as_deref())
        .unwrap_or(FALLBACK_ALIGNMENT);

    format!(
        "padding: {}; margin: {}; background-color: {}; color: {}; font-size: {}; text-align: {}",
        padding, margin, background, color, font_size, alignment
    )
}

fn block_body(block: &ContentBlock, primary_color: &str) -> String {
    match block.kind {
        BlockKind::Heading => format!(
            "<h2 style=\"margin: 0;\">{}</h2>",
            escape_html(&block.content)
        ),
        BlockKind::Text => format!(
            "<p style=\"margin: 0; line-height: 1.6;\">{}</p>",
            escape_html(&block.content)
        ),
        // The src is the upload URL chosen in the media library; inserted
        // verbatim, matching what the backend stores.
        BlockKind::Image => format!(
            "<img src=\"{}\" alt=\"\" style=\"max-width: 100%; height: auto;\" />",
            block.content
        ),
        BlockKind::Button => format!(
            "<a href=\"#\" style=\"display: inline-block; background-color: {}; color: white; padding: 12px 24px; text-decoration: none; border-radius: 4px;\">{}</a>",
            primary_color,
            escape_html(&block.content)
        ),
        BlockKind::Divider => {
            "<hr style=\"border: none; border-top: 1px solid #ddd; margin: 16px 0;\" />".to_string()
        }
        BlockKind::Spacer => format!(
            "<div style=\"height: {}px;\"></div>",
            spacer_height(&block.content)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::block::BlockStyle;

    fn text_block(content: &str) -> ContentBlock {
        ContentBlock {
            id: "b1".into(),
            kind: BlockKind::Text,
            content: content.into(),
            style: None,
        }
    }

    #[test]
    fn test_empty_list_renders_empty_string() {
        assert_eq!(render_email_html(&[], &GlobalStyles::default()), "");
    }

    #[test]
    fn test_text_content_is_escaped() {
        let html = render_email_html(&[text_block("<b>hi</b>")], &GlobalStyles::default());
        assert!(html.contains("<p style=\"margin: 0; line-height: 1.6;\">&lt;b&gt;hi&lt;/b&gt;</p>"));
        assert!(!html.contains("<b>hi</b>"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let blocks = vec![
            ContentBlock::new(BlockKind::Heading),
            ContentBlock::new(BlockKind::Text),
            ContentBlock::new(BlockKind::Divider),
        ];
        let styles = GlobalStyles::editor_default();
        let first = render_email_html(&blocks, &styles);
        let second = render_email_html(&blocks, &styles);
        assert_eq!(first, second);
    }

    #[test]
    fn test_block_style_wins_over_global_and_fallback() {
        let mut block = text_block("hello");
        block.style = Some(BlockStyle {
            text_color: Some("#111111".into()),
            ..BlockStyle::default()
        });
        let global = GlobalStyles {
            text_color: Some("#222222".into()),
            font_size: Some("18px".into()),
            ..GlobalStyles::default()
        };
        let html = render_email_html(&[block], &global);
        // block override, then global, then fallback for the rest
        assert!(html.contains("color: #111111"));
        assert!(html.contains("font-size: 18px"));
        assert!(html.contains("padding: 16px"));
    }

    #[test]
    fn test_button_uses_global_primary_color() {
        let block = ContentBlock {
            id: "b".into(),
            kind: BlockKind::Button,
            content: "Read more".into(),
            style: None,
        };
        let global = GlobalStyles {
            primary_color: Some("#ff006e".into()),
            ..GlobalStyles::default()
        };
        let html = render_email_html(&[block], &global);
        assert!(html.contains("background-color: #ff006e"));
        assert!(html.contains(">Read more</a>"));
    }

    #[test]
    fn test_spacer_height_parsing() {
        assert_eq!(spacer_height("48"), 48);
        assert_eq!(spacer_height("40px"), 40);
        assert_eq!(spacer_height("New spacer"), 32);
        assert_eq!(spacer_height(""), 32);
    }

    #[test]
    fn test_rows_follow_block_order() {
        let heading = ContentBlock {
            id: "h".into(),
            kind: BlockKind::Heading,
            content: "First".into(),
            style: None,
        };
        let text = text_block("Second");
        let html = render_email_html(&[heading, text], &GlobalStyles::default());
        let h = html.find("First").unwrap();
        let t = html.find("Second").unwrap();
        assert!(h < t);
        assert!(html.starts_with("<table"));
        assert!(html.ends_with("</table>"));
    }
}
