use serde::{Deserialize, Serialize};

use crate::editor::editor_data::EditorData;

/// Newsletter campaign as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Campaign {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub subject_line: String,
    #[serde(default)]
    pub from_name: String,
    #[serde(default)]
    pub from_email: String,
    #[serde(default)]
    pub reply_to_email: String,
    #[serde(default)]
    pub content_html: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub total_recipients: i64,
    #[serde(default)]
    pub opened_count: i64,
    #[serde(default)]
    pub clicked_count: i64,
    #[serde(default)]
    pub sent_at: Option<String>,
}

impl Campaign {
    /// Only drafts are editable and sendable; everything else is history.
    pub fn is_draft(&self) -> bool {
        self.status == "draft"
    }
}

/// Save/auto-save payload: the editor aggregate plus the campaign status.
#[derive(Debug, Clone, Serialize)]
pub struct CampaignPayload {
    #[serde(flatten)]
    pub editor: EditorData,
    pub status: String,
}

/// Per-campaign delivery analytics from `GET .../:id/analytics`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CampaignAnalytics {
    #[serde(default)]
    pub total_recipients: i64,
    #[serde(default)]
    pub delivered: i64,
    #[serde(default)]
    pub opened: i64,
    #[serde(default)]
    pub clicked: i64,
    #[serde(default)]
    pub bounced: i64,
    #[serde(default)]
    pub unsubscribed: i64,
    #[serde(default)]
    pub open_rate: f64,
    #[serde(default)]
    pub click_rate: f64,
    #[serde(default)]
    pub bounce_rate: f64,
    #[serde(default)]
    pub unsubscribe_rate: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsResponse {
    pub analytics: CampaignAnalytics,
}

/// `POST .../:id/send-test` payload.
#[derive(Debug, Clone, Serialize)]
pub struct SendTestRequest {
    pub test_emails: Vec<String>,
}
