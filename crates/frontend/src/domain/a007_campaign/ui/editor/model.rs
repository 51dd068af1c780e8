use contracts::domain::campaign::{Campaign, CampaignPayload};
use contracts::domain::media::UploadResponse;
use wasm_bindgen::JsCast;

use crate::shared::api_utils::{self, api_base, extract_error_message};

pub async fn create_campaign(payload: &CampaignPayload, token: &str) -> Result<Campaign, String> {
    api_utils::post_json("/api/admin/newsletter-campaigns", token, payload).await
}

pub async fn update_campaign(
    id: i64,
    payload: &CampaignPayload,
    token: &str,
) -> Result<(), String> {
    api_utils::put_json_unit(
        &format!("/api/admin/newsletter-campaigns/{}", id),
        token,
        payload,
    )
    .await
}

/// Multipart upload; the backend answers with the public URL.
pub async fn upload_file(file: web_sys::File, token: &str) -> Result<String, String> {
    use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob("file", &file)
        .map_err(|e| format!("{e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let url = format!("{}/api/admin/upload", api_base());
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Authorization", &format!("Bearer {}", token))
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().unwrap_or_default();

    if !resp.ok() {
        return Err(extract_error_message(resp.status(), &text));
    }

    let parsed: UploadResponse =
        serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(parsed.url)
}
