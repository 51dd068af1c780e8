use contracts::domain::tour::TourDto;

use crate::shared::api_utils;

pub async fn save_tour(dto: &TourDto, token: &str) -> Result<(), String> {
    match dto.id {
        Some(id) => {
            api_utils::put_json_unit(&format!("/api/admin/tours/{}", id), token, dto).await
        }
        None => api_utils::post_json_unit("/api/admin/tours", token, dto).await,
    }
}
