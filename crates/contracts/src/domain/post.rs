use serde::{Deserialize, Serialize};

/// Blog post as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub featured_image: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Create/update payload for the posts endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PostDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub category: String,
    pub tags: String,
    pub featured_image: String,
    pub published_at: String,
}

impl PostDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".into());
        }
        if self.slug.trim().is_empty() {
            return Err("Slug is required".into());
        }
        if self.author.trim().is_empty() {
            return Err("Author is required".into());
        }
        Ok(())
    }
}

impl From<Post> for PostDto {
    fn from(p: Post) -> Self {
        Self {
            id: Some(p.id),
            title: p.title,
            slug: p.slug,
            content: p.content,
            excerpt: p.excerpt,
            author: p.author,
            category: p.category,
            tags: p.tags,
            featured_image: p.featured_image,
            published_at: p.published_at,
        }
    }
}

/// `GET /api/posts` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct PostListResponse {
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// Bulk status payload (`publish`/`draft` row actions).
#[derive(Debug, Clone, Serialize)]
pub struct PostStatusUpdate {
    pub status: String,
}
