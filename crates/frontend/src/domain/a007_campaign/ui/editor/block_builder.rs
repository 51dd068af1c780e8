//! Block builder tab: palette, draggable block rows, per-block editing.
//!
//! Reordering is plain HTML5 drag-and-drop forwarded to the `BlockList`
//! state machine; no order logic lives in the view.

use contracts::editor::block::{BlockKind, BlockStyle, ContentBlock};
use contracts::editor::global_styles::GlobalStyles;
use contracts::editor::html::spacer_height;
use leptos::prelude::*;

use super::view_model::CampaignEditorViewModel;
use crate::shared::icons::icon;

fn update_style_field(
    vm: CampaignEditorViewModel,
    id: &str,
    apply: impl FnOnce(&mut BlockStyle),
) {
    let mut changed = false;
    vm.blocks.update(|list| {
        let mut style = list
            .get(id)
            .and_then(|b| b.style.clone())
            .unwrap_or_default();
        apply(&mut style);
        changed = list.update_style(id, style);
    });
    if changed {
        vm.touch();
    }
}

fn block_preview(block: &ContentBlock, styles: &GlobalStyles) -> AnyView {
    let content = block.content.clone();
    match block.kind {
        BlockKind::Heading => view! { <h2 class="block-preview__heading">{content}</h2> }.into_any(),
        BlockKind::Text => view! { <p class="block-preview__text">{content}</p> }.into_any(),
        BlockKind::Image => {
            if content.is_empty() {
                view! { <span class="block-preview__placeholder">{"(no image selected)"}</span> }
                    .into_any()
            } else {
                view! { <img class="block-preview__image" src=content alt="Block" /> }.into_any()
            }
        }
        BlockKind::Button => {
            let background = styles
                .primary_color
                .clone()
                .unwrap_or_else(|| "#3b82f6".to_string());
            view! {
                <span
                    class="block-preview__button"
                    style=format!("background-color: {}; color: white; padding: 12px 24px; border-radius: 4px;", background)
                >
                    {content}
                </span>
            }
            .into_any()
        }
        BlockKind::Divider => view! { <hr class="block-preview__divider" /> }.into_any(),
        BlockKind::Spacer => view! {
            <span class="block-preview__placeholder">
                {format!("Spacer — {}px", spacer_height(&content))}
            </span>
        }
        .into_any(),
    }
}

#[component]
pub fn BlockBuilder(vm: CampaignEditorViewModel) -> impl IntoView {
    let (editing_block, set_editing_block) = signal(Option::<String>::None);

    let add_block = move |kind: BlockKind| {
        vm.blocks.update(|list| {
            list.add(kind);
        });
        vm.touch();
    };

    view! {
        <div class="block-builder">
            <div class="block-builder__palette">
                <h3>{"Add Blocks"}</h3>
                {BlockKind::ALL.iter().map(|kind| {
                    let kind = *kind;
                    view! {
                        <button
                            class="button button--secondary block-builder__palette-item"
                            on:click=move |_| add_block(kind)
                        >
                            {format!("+ {}", kind.label())}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="block-builder__list">
                <h3>{"Content Blocks (Drag to Reorder)"}</h3>

                <Show
                    when=move || !vm.blocks.get().is_empty()
                    fallback=|| view! {
                        <div class="block-builder__empty">
                            {"No blocks yet. Add one from the left panel."}
                        </div>
                    }
                >
                    {move || vm.blocks.get().to_vec().into_iter().map(|block| {
                        let id = block.id.clone();
                        let id_for_drag = id.clone();
                        let id_for_drop = id.clone();
                        let id_for_edit = id.clone();
                        let id_for_delete = id.clone();
                        let id_for_editing_check = id.clone();
                        let styles = vm.styles.get();
                        let is_editing = move || editing_block.get().as_deref() == Some(id_for_editing_check.as_str());

                        view! {
                            <div
                                class="block-item"
                                class:block-item--dragging=move || {
                                    vm.blocks.get().dragging_id() == Some(id.as_str())
                                }
                                draggable="true"
                                on:dragstart=move |_| {
                                    vm.blocks.update(|list| {
                                        list.begin_drag(&id_for_drag);
                                    });
                                }
                                on:dragover=move |ev| ev.prevent_default()
                                on:drop=move |ev| {
                                    ev.prevent_default();
                                    let mut changed = false;
                                    vm.blocks.update(|list| {
                                        changed = list.drop_on(&id_for_drop);
                                    });
                                    if changed {
                                        vm.touch();
                                    }
                                }
                                on:dragend=move |_| {
                                    vm.blocks.update(|list| list.cancel_drag());
                                }
                            >
                                <div class="block-item__handle">{icon("grip")}</div>

                                <div class="block-item__body">
                                    <div class="block-item__kind">{block.kind.label()}</div>

                                    <Show
                                        when=is_editing
                                        fallback={
                                            let block = block.clone();
                                            let styles = styles.clone();
                                            move || block_preview(&block, &styles)
                                        }
                                    >
                                        {
                                            let block = block.clone();
                                            move || {
                                                let edit_id = block.id.clone();
                                                let style = block.style.clone().unwrap_or_default();
                                                let content_id = edit_id.clone();
                                                let align_id = edit_id.clone();
                                                let color_id = edit_id.clone();
                                                let bg_id = edit_id.clone();
                                                let size_id = edit_id.clone();
                                                view! {
                                                    <div class="block-item__editor">
                                                        <textarea
                                                            rows="3"
                                                            prop:value=block.content.clone()
                                                            placeholder={match block.kind {
                                                                BlockKind::Image => "Image URL",
                                                                BlockKind::Spacer => "Height in px",
                                                                _ => "Content",
                                                            }}
                                                            on:input=move |ev| {
                                                                let value = event_target_value(&ev);
                                                                if vm.blocks.try_update(|list| {
                                                                    list.update_content(&content_id, value)
                                                                }).unwrap_or(false) {
                                                                    vm.touch();
                                                                }
                                                            }
                                                        />
                                                        <div class="block-item__style-row">
                                                            <label>{"Align"}
                                                                <select on:change=move |ev| {
                                                                    let value = event_target_value(&ev);
                                                                    update_style_field(vm, &align_id, |s| {
                                                                        s.alignment = if value.is_empty() { None } else { Some(value.clone()) };
                                                                    });
                                                                }>
                                                                    <option value="" selected=style.alignment.is_none()>{"default"}</option>
                                                                    <option value="left" selected=style.alignment.as_deref() == Some("left")>{"left"}</option>
                                                                    <option value="center" selected=style.alignment.as_deref() == Some("center")>{"center"}</option>
                                                                    <option value="right" selected=style.alignment.as_deref() == Some("right")>{"right"}</option>
                                                                </select>
                                                            </label>
                                                            <label>{"Text"}
                                                                <input
                                                                    type="color"
                                                                    prop:value=style.text_color.clone().unwrap_or_else(|| "#000000".into())
                                                                    on:input=move |ev| {
                                                                        let value = event_target_value(&ev);
                                                                        update_style_field(vm, &color_id, |s| s.text_color = Some(value.clone()));
                                                                    }
                                                                />
                                                            </label>
                                                            <label>{"Background"}
                                                                <input
                                                                    type="color"
                                                                    prop:value=style.background_color.clone().unwrap_or_else(|| "#ffffff".into())
                                                                    on:input=move |ev| {
                                                                        let value = event_target_value(&ev);
                                                                        update_style_field(vm, &bg_id, |s| s.background_color = Some(value.clone()));
                                                                    }
                                                                />
                                                            </label>
                                                            <label>{"Font size"}
                                                                <input
                                                                    type="text"
                                                                    class="block-item__font-size"
                                                                    prop:value=style.font_size.clone().unwrap_or_default()
                                                                    placeholder="16px"
                                                                    on:input=move |ev| {
                                                                        let value = event_target_value(&ev);
                                                                        update_style_field(vm, &size_id, |s| {
                                                                            s.font_size = if value.is_empty() { None } else { Some(value.clone()) };
                                                                        });
                                                                    }
                                                                />
                                                            </label>
                                                        </div>
                                                        <button
                                                            class="button button--small"
                                                            on:click=move |_| set_editing_block.set(None)
                                                        >
                                                            {"Done"}
                                                        </button>
                                                    </div>
                                                }
                                            }
                                        }
                                    </Show>
                                </div>

                                <div class="block-item__actions">
                                    <button
                                        class="button button--small"
                                        on:click=move |_| set_editing_block.set(Some(id_for_edit.clone()))
                                    >
                                        {icon("edit")}
                                    </button>
                                    <button
                                        class="button button--small button--danger"
                                        on:click=move |_| {
                                            let mut changed = false;
                                            vm.blocks.update(|list| {
                                                changed = list.remove(&id_for_delete);
                                            });
                                            if changed {
                                                vm.touch();
                                            }
                                        }
                                    >
                                        {icon("delete")}
                                    </button>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </Show>
            </div>
        </div>
    }
}
