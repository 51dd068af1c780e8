use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum PreviewMode {
    Desktop,
    Mobile,
}

/// Live preview of the campaign HTML, with a 375px mobile frame.
#[component]
pub fn PreviewPanel(html: RwSignal<String>) -> impl IntoView {
    let (mode, set_mode) = signal(PreviewMode::Desktop);

    view! {
        <div class="preview-panel">
            <div class="preview-panel__toolbar">
                <span class="preview-panel__title">{"Email Preview"}</span>
                <button
                    class="button button--small"
                    class:button--active=move || mode.get() == PreviewMode::Desktop
                    on:click=move |_| set_mode.set(PreviewMode::Desktop)
                >
                    {"Desktop"}
                </button>
                <button
                    class="button button--small"
                    class:button--active=move || mode.get() == PreviewMode::Mobile
                    on:click=move |_| set_mode.set(PreviewMode::Mobile)
                >
                    {"Mobile"}
                </button>
            </div>

            <div
                class="preview-panel__frame"
                class:preview-panel__frame--mobile=move || mode.get() == PreviewMode::Mobile
                style=move || match mode.get() {
                    PreviewMode::Desktop => "width: 100%;".to_string(),
                    PreviewMode::Mobile => "width: 375px; margin: 0 auto;".to_string(),
                }
                inner_html=move || html.get()
            ></div>
        </div>
    }
}
