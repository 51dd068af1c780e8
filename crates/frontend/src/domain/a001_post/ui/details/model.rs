use contracts::domain::post::PostDto;

use crate::shared::api_utils;

/// POST for new posts, PUT for existing ones.
pub async fn save_post(dto: &PostDto, token: &str) -> Result<(), String> {
    match dto.id {
        Some(id) => {
            api_utils::put_json_unit(&format!("/api/admin/posts/{}", id), token, dto).await
        }
        None => api_utils::post_json_unit("/api/admin/posts", token, dto).await,
    }
}
