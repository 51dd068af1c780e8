//! Sidebar with grouped navigation items.

use crate::layout::global_context::{AppGlobalContext, Screen};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<(Screen, &'static str)>, // (screen, icon)
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Content",
            items: vec![
                (Screen::Posts, "file-text"),
                (Screen::Tours, "map"),
                (Screen::Pages, "layout"),
            ],
        },
        MenuGroup {
            label: "Newsletter",
            items: vec![
                (Screen::Subscribers, "users"),
                (Screen::Campaigns, "mail"),
                (Screen::Templates, "copy"),
                (Screen::RssFeeds, "rss"),
            ],
        },
        MenuGroup {
            label: "Site",
            items: vec![
                (Screen::SiteSettings, "settings"),
                (Screen::Donations, "heart"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <nav class="sidebar">
            {menu_groups().into_iter().map(|group| {
                view! {
                    <div class="sidebar__group">
                        <div class="sidebar__group-label">{group.label}</div>
                        {group.items.into_iter().map(|(screen, icon_name)| {
                            view! {
                                <button
                                    class="sidebar__item"
                                    class:sidebar__item--active=move || ctx.active_screen.get() == screen
                                    on:click=move |_| ctx.active_screen.set(screen)
                                >
                                    {icon(icon_name)}
                                    <span>{screen.title()}</span>
                                </button>
                            }
                        }).collect_view()}
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
