//! Media library: upload images through the backend, keep a session-local
//! listing, insert picked images into the campaign body.

use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use super::model;
use super::view_model::CampaignEditorViewModel;
use crate::shared::files::format_file_size;
use crate::shared::icons::icon;

const MAX_UPLOAD_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

#[derive(Clone, Debug, PartialEq)]
struct MediaItem {
    id: String,
    url: String,
    name: String,
    size: f64,
}

#[component]
pub fn MediaLibrary(vm: CampaignEditorViewModel, token: String) -> impl IntoView {
    let (media, set_media) = signal::<Vec<MediaItem>>(Vec::new());
    let (uploading, set_uploading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let token = StoredValue::new(token);

    let handle_file_pick = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = match ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            Some(i) => i,
            None => return,
        };
        let file = match input.files().and_then(|files| files.get(0)) {
            Some(f) => f,
            None => return,
        };

        if !file.type_().starts_with("image/") {
            set_error.set(Some("Only image files are allowed".to_string()));
            return;
        }
        if file.size() > MAX_UPLOAD_BYTES {
            set_error.set(Some("File size must be less than 5MB".to_string()));
            return;
        }

        let name = file.name();
        let size = file.size();
        set_uploading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match model::upload_file(file, &token.get_value()).await {
                Ok(url) => {
                    set_media.update(|items| {
                        items.insert(
                            0,
                            MediaItem {
                                id: Uuid::new_v4().to_string(),
                                url,
                                name,
                                size,
                            },
                        );
                    });
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_uploading.set(false);
        });
    };

    let insert_image = move |item: MediaItem| {
        vm.append_html(&format!(
            "<img src=\"{}\" alt=\"{}\" style=\"max-width:100%;border-radius:8px;\" />",
            item.url, item.name
        ));
    };

    let remove_item = move |id: String| {
        set_media.update(|items| items.retain(|item| item.id != id));
    };

    view! {
        <div class="media-library">
            <h3>{"Media Library"}</h3>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <label class="media-library__upload">
                {icon("image")}
                {move || if uploading.get() { "Uploading..." } else { "Upload image" }}
                <input
                    type="file"
                    accept="image/*"
                    on:change=handle_file_pick
                    disabled=move || uploading.get()
                />
            </label>

            <div class="media-library__grid">
                {move || media.get().into_iter().map(|item| {
                    let item_for_insert = item.clone();
                    let id_for_remove = item.id.clone();
                    view! {
                        <div class="media-library__item">
                            <img src=item.url.clone() alt=item.name.clone() />
                            <div class="media-library__meta">
                                <span class="media-library__name">{item.name.clone()}</span>
                                <span class="media-library__size">{format_file_size(item.size)}</span>
                            </div>
                            <div class="media-library__actions">
                                <button
                                    class="button button--small"
                                    on:click=move |_| insert_image(item_for_insert.clone())
                                >
                                    {"Insert"}
                                </button>
                                <button
                                    class="button button--small button--danger"
                                    on:click=move |_| remove_item(id_for_remove.clone())
                                >
                                    {icon("delete")}
                                </button>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
