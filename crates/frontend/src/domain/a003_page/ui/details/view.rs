use std::rc::Rc;

use contracts::domain::page::Page;
use leptos::prelude::*;

use super::view_model::PageDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::slug::slugify;
use crate::system::auth::context::use_auth;

#[component]
pub fn PageDetails(
    page: Option<Page>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = PageDetailsViewModel::new(page);
    let (auth_state, _) = use_auth();

    view! {
        <div class="details-container page-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Edit Page" } else { "New Page" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-row">
                    <div class="form-group">
                        <label for="page-title">{"Title"}</label>
                        <input
                            type="text"
                            id="page-title"
                            prop:value=move || vm.form.get().title
                            on:input=move |ev| vm.set_title(event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="page-slug">{"Slug"}</label>
                        <input
                            type="text"
                            id="page-slug"
                            prop:value=move || vm.form.get().slug
                            on:input=move |ev| vm.form.update(|f| f.slug = slugify(&event_target_value(&ev)))
                            required
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="page-content">{"Content"}</label>
                    <textarea
                        id="page-content"
                        class="rich-text-input"
                        prop:value=move || vm.form.get().content
                        on:input=move |ev| vm.form.update(|f| f.content = event_target_value(&ev))
                        placeholder="Page body (HTML)"
                        rows="12"
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
                    {move || if vm.is_edit_mode() { "Save Page" } else { "Create Page" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| (on_cancel)(())>
                    {icon("cancel")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
