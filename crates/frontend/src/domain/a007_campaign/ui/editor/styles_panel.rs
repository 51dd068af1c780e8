//! Global styles panel: presets plus individual property editing.

use contracts::editor::global_styles::GlobalStyles;
use leptos::prelude::*;

use super::view_model::CampaignEditorViewModel;

fn color_row(
    vm: CampaignEditorViewModel,
    label: &'static str,
    get: fn(&GlobalStyles) -> Option<String>,
    set: fn(&mut GlobalStyles, Option<String>),
) -> impl IntoView {
    view! {
        <label class="styles-panel__row">
            <span>{label}</span>
            <input
                type="color"
                prop:value=move || get(&vm.styles.get()).unwrap_or_else(|| "#000000".into())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.styles.update(|s| set(s, Some(value.clone())));
                    vm.touch();
                }
            />
        </label>
    }
}

fn text_row(
    vm: CampaignEditorViewModel,
    label: &'static str,
    placeholder: &'static str,
    get: fn(&GlobalStyles) -> Option<String>,
    set: fn(&mut GlobalStyles, Option<String>),
) -> impl IntoView {
    view! {
        <label class="styles-panel__row">
            <span>{label}</span>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || get(&vm.styles.get()).unwrap_or_default()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    let next = if value.is_empty() { None } else { Some(value) };
                    vm.styles.update(|s| set(s, next.clone()));
                    vm.touch();
                }
            />
        </label>
    }
}

#[component]
pub fn StylesPanel(vm: CampaignEditorViewModel) -> impl IntoView {
    let apply_preset = move |name: &'static str| {
        if let Some(preset) = GlobalStyles::preset(name) {
            vm.styles.set(preset);
            vm.touch();
        }
    };

    view! {
        <div class="styles-panel">
            <h3>{"Global Styles"}</h3>

            <div class="styles-panel__presets">
                {GlobalStyles::PRESET_NAMES.iter().map(|name| {
                    let name = *name;
                    view! {
                        <button
                            class="button button--secondary"
                            on:click=move |_| apply_preset(name)
                        >
                            {name}
                        </button>
                    }
                }).collect_view()}
            </div>

            {color_row(vm, "Primary color", |s| s.primary_color.clone(), |s, v| s.primary_color = v)}
            {color_row(vm, "Secondary color", |s| s.secondary_color.clone(), |s, v| s.secondary_color = v)}
            {color_row(vm, "Accent color", |s| s.accent_color.clone(), |s, v| s.accent_color = v)}
            {color_row(vm, "Background", |s| s.background_color.clone(), |s, v| s.background_color = v)}
            {color_row(vm, "Text color", |s| s.text_color.clone(), |s, v| s.text_color = v)}

            {text_row(vm, "Font family", "Arial, sans-serif", |s| s.font_family.clone(), |s, v| s.font_family = v)}
            {text_row(vm, "Font size", "16px", |s| s.font_size.clone(), |s, v| s.font_size = v)}
            {text_row(vm, "Line height", "1.6", |s| s.line_height.clone(), |s, v| s.line_height = v)}
            {text_row(vm, "Border radius", "8px", |s| s.border_radius.clone(), |s, v| s.border_radius = v)}
            {text_row(vm, "Padding", "16px", |s| s.padding.clone(), |s, v| s.padding = v)}
            {text_row(vm, "Margin", "8px", |s| s.margin.clone(), |s, v| s.margin = v)}
        </div>
    }
}
