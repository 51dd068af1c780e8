use serde::{Deserialize, Serialize};

/// Static site page.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Page {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PageDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub slug: String,
    pub content: String,
}

impl PageDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".into());
        }
        if self.slug.trim().is_empty() {
            return Err("Slug is required".into());
        }
        Ok(())
    }
}

impl From<Page> for PageDto {
    fn from(p: Page) -> Self {
        Self {
            id: Some(p.id),
            title: p.title,
            slug: p.slug,
            content: p.content,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageListResponse {
    #[serde(default)]
    pub pages: Vec<Page>,
}
