use serde::{Deserialize, Serialize};

/// Site-wide settings, a singleton record behind `GET/PUT /api/admin/site-info`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteSettings {
    #[serde(default)]
    pub site_name: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub description: String,
}

impl SiteSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.site_name.trim().is_empty() {
            return Err("Site name is required".into());
        }
        if self.contact_email.trim().is_empty() {
            return Err("Contact email is required".into());
        }
        Ok(())
    }
}
