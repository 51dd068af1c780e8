use serde::{Deserialize, Serialize};

/// Newsletter subscriber.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Subscriber {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub confirmed: bool,
    #[serde(default)]
    pub created_at: String,
}

/// Add-subscriber payload. `confirmed` skips the confirmation email.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SubscriberDto {
    pub email: String,
    pub name: String,
    pub interests: String,
    pub confirmed: bool,
}

impl SubscriberDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.email.trim().is_empty() {
            return Err("Email is required".into());
        }
        if !self.email.contains('@') {
            return Err("Email must be a valid address".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubscriberListResponse {
    #[serde(default)]
    pub subscribers: Vec<Subscriber>,
}
