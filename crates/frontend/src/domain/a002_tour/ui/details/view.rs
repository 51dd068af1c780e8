use std::rc::Rc;

use contracts::domain::tour::Tour;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::view_model::TourDetailsViewModel;
use crate::shared::files::read_file_as_data_url;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[component]
pub fn TourDetails(
    tour: Option<Tour>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = TourDetailsViewModel::new(tour);
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
        <div class="details-container tour-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Edit Tour" } else { "New Tour" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-row">
                    <div class="form-group">
                        <label for="tour-name">{"Name"}</label>
                        <input
                            type="text"
                            id="tour-name"
                            prop:value=move || vm.form.get().name
                            on:input=move |ev| vm.set_name(event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="tour-slug">{"Slug"}</label>
                        <input
                            type="text"
                            id="tour-slug"
                            prop:value=move || vm.form.get().slug
                            on:input=move |ev| vm.set_slug(event_target_value(&ev))
                            required
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="tour-city">{"City"}</label>
                        <input
                            type="text"
                            id="tour-city"
                            prop:value=move || vm.form.get().city
                            on:input=move |ev| vm.form.update(|f| f.city = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="tour-type">{"Type"}</label>
                        <input
                            type="text"
                            id="tour-type"
                            prop:value=move || vm.form.get().tour_type
                            on:input=move |ev| vm.form.update(|f| f.tour_type = event_target_value(&ev))
                            placeholder="walking, bus, museum..."
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="tour-date">{"Date"}</label>
                        <input
                            type="date"
                            id="tour-date"
                            prop:value=move || vm.form.get().date
                            on:input=move |ev| vm.form.update(|f| f.date = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="tour-time">{"Time"}</label>
                        <input
                            type="time"
                            id="tour-time"
                            prop:value=move || vm.form.get().time
                            on:input=move |ev| vm.form.update(|f| f.time = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group form-group--checkbox">
                        <label>
                            <input
                                type="checkbox"
                                prop:checked=move || vm.form.get().is_free
                                on:change=move |ev| vm.form.update(|f| f.is_free = event_target_checked(&ev))
                            />
                            {"Free tour"}
                        </label>
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="tour-guide">{"Guide"}</label>
                        <input
                            type="text"
                            id="tour-guide"
                            prop:value=move || vm.form.get().guide
                            on:input=move |ev| vm.form.update(|f| f.guide = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="tour-map-url">{"Map URL"}</label>
                        <input
                            type="url"
                            id="tour-map-url"
                            prop:value=move || vm.form.get().map_url
                            on:input=move |ev| vm.form.update(|f| f.map_url = event_target_value(&ev))
                            placeholder="https://..."
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="tour-image">{"Featured Image"}</label>
                    <input
                        type="file"
                        id="tour-image"
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
                    <label for="tour-description">{"Description"}</label>
                    <textarea
                        id="tour-description"
                        class="rich-text-input"
                        prop:value=move || vm.form.get().description
                        on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                        rows="8"
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
                    {move || if vm.is_edit_mode() { "Save Tour" } else { "Create Tour" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| (on_cancel)(())>
                    {icon("cancel")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
