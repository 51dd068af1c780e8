use serde::{Deserialize, Serialize};

/// RSS feed registration. Fetching and parsing are backend concerns; the
/// admin UI only manages the feed list and browses already-ingested articles.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RssFeed {
    pub id: i64,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub auto_include: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub articles_count: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RssFeedDto {
    pub name: String,
    pub url: String,
    pub auto_include: bool,
}

impl RssFeedDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Feed name is required".into());
        }
        if self.url.trim().is_empty() {
            return Err("Feed URL is required".into());
        }
        Ok(())
    }
}

/// Ingested article, insertable into a campaign body.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RssArticle {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub published_at: String,
}
