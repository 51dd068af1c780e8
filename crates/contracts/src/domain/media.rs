use serde::Deserialize;

/// `POST /api/admin/upload` response.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}
