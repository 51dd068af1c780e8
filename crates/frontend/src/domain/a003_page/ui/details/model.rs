use contracts::domain::page::PageDto;

use crate::shared::api_utils;

pub async fn save_page(dto: &PageDto, token: &str) -> Result<(), String> {
    match dto.id {
        Some(id) => {
            api_utils::put_json_unit(&format!("/api/admin/pages/{}", id), token, dto).await
        }
        None => api_utils::post_json_unit("/api/admin/pages", token, dto).await,
    }
}
