use std::rc::Rc;

use contracts::domain::post::Post;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::view_model::PostDetailsViewModel;
use crate::shared::files::read_file_as_data_url;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[component]
pub fn PostDetails(
    post: Option<Post>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = PostDetailsViewModel::new(post);
    let (auth_state, _) = use_auth();

    let handle_image_pick = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = match ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            Some(i) => i,
            None => return,
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            let form = vm.form;
            read_file_as_data_url(
                file,
                Rc::new(move |data_url: String| {
                    form.update(|f| f.featured_image = data_url.clone());
                }),
            );
        }
    };

    view! {
        <div class="details-container post-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Edit Post" } else { "New Post" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="post-title">{"Title"}</label>
                    <input
                        type="text"
                        id="post-title"
                        prop:value=move || vm.form.get().title
                        on:input=move |ev| vm.set_title(event_target_value(&ev))
                        placeholder="Enter post title"
                        required
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="post-slug">{"Slug"}</label>
                        <input
                            type="text"
                            id="post-slug"
                            prop:value=move || vm.form.get().slug
                            on:input=move |ev| vm.set_slug(event_target_value(&ev))
                            placeholder="post-url-slug"
                            required
                        />
                        <p class="form-hint">{"Auto-formatted from the title"}</p>
                    </div>
                    <div class="form-group">
                        <label for="post-author">{"Author"}</label>
                        <input
                            type="text"
                            id="post-author"
                            prop:value=move || vm.form.get().author
                            on:input=move |ev| vm.form.update(|f| f.author = event_target_value(&ev))
                            placeholder="Author name"
                            required
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="post-excerpt">{"Excerpt"}</label>
                    <textarea
                        id="post-excerpt"
                        prop:value=move || vm.form.get().excerpt
                        on:input=move |ev| vm.form.update(|f| f.excerpt = event_target_value(&ev))
                        placeholder="Short summary shown in listings"
                        rows="3"
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="post-category">{"Category"}</label>
                        <input
                            type="text"
                            id="post-category"
                            prop:value=move || vm.form.get().category
                            on:input=move |ev| vm.form.update(|f| f.category = event_target_value(&ev))
                            placeholder="e.g. News, Updates, Events"
                        />
                    </div>
                    <div class="form-group">
                        <label for="post-tags">{"Tags"}</label>
                        <input
                            type="text"
                            id="post-tags"
                            prop:value=move || vm.form.get().tags
                            on:input=move |ev| vm.form.update(|f| f.tags = event_target_value(&ev))
                            placeholder="comma, separated, tags"
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="post-image">{"Featured Image"}</label>
                    <input
                        type="file"
                        id="post-image"
                        accept="image/*"
                        on:change=handle_image_pick
                    />
                    {move || {
                        let src = vm.form.get().featured_image;
                        (!src.is_empty()).then(|| view! {
                            <img class="image-preview" src=src alt="Featured image preview" />
                        })
                    }}
                </div>

                <div class="form-group">
                    <label for="post-published-at">{"Publish Date"}</label>
                    <input
                        type="datetime-local"
                        id="post-published-at"
                        prop:value=move || vm.form.get().published_at
                        on:input=move |ev| vm.form.update(|f| f.published_at = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="post-content">{"Content"}</label>
                    <textarea
                        id="post-content"
                        class="rich-text-input"
                        prop:value=move || vm.form.get().content
                        on:input=move |ev| vm.form.update(|f| f.content = event_target_value(&ev))
                        placeholder="Post body (HTML)"
                        rows="12"
                        required
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let on_saved = on_saved.clone();
                        move |_| {
                            let token = auth_state.get_untracked().token.unwrap_or_default();
                            vm.save_command(token, on_saved.clone())
                        }
                    }
                    disabled=move || vm.saving.get()
                >
                    {icon("save")}
                    {move || if vm.is_edit_mode() { "Save Post" } else { "Create Post" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| (on_cancel)(())>
                    {icon("cancel")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
