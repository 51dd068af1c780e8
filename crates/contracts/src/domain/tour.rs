use serde::{Deserialize, Serialize};

/// Guided tour / event record.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Tour {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub city: String,
    #[serde(rename = "type", default)]
    pub tour_type: String,
    #[serde(default)]
    pub is_free: bool,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub guide: String,
    #[serde(default)]
    pub map_url: String,
    #[serde(default)]
    pub featured_image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TourDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub city: String,
    #[serde(rename = "type")]
    pub tour_type: String,
    pub is_free: bool,
    pub date: String,
    pub time: String,
    pub guide: String,
    pub map_url: String,
    pub featured_image: String,
}

impl TourDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        if self.slug.trim().is_empty() {
            return Err("Slug is required".into());
        }
        Ok(())
    }
}

impl From<Tour> for TourDto {
    fn from(t: Tour) -> Self {
        Self {
            id: Some(t.id),
            name: t.name,
            slug: t.slug,
            description: t.description,
            city: t.city,
            tour_type: t.tour_type,
            is_free: t.is_free,
            date: t.date,
            time: t.time,
            guide: t.guide,
            map_url: t.map_url,
            featured_image: t.featured_image,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TourListResponse {
    #[serde(default)]
    pub tours: Vec<Tour>,
}
