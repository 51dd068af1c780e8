use serde::{Deserialize, Serialize};

/// Donation record, read-only in the admin UI.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Donation {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DonationListResponse {
    #[serde(default)]
    pub donations: Vec<Donation>,
}
