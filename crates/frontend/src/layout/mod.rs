pub mod global_context;
pub mod sidebar;
pub mod top_header;

use global_context::{AppGlobalContext, Screen};
use leptos::prelude::*;
use sidebar::Sidebar;
use top_header::TopHeader;

use crate::domain::a001_post::ui::list::PostList;
use crate::domain::a002_tour::ui::list::TourList;
use crate::domain::a003_page::ui::list::PageList;
use crate::domain::a004_site_settings::ui::details::SiteSettingsDetails;
use crate::domain::a005_donation::ui::list::DonationList;
use crate::domain::a006_subscriber::ui::list::SubscriberList;
use crate::domain::a007_campaign::ui::list::CampaignList;
use crate::domain::a008_email_template::ui::list::TemplateManager;
use crate::domain::a009_rss_feed::ui::list::RssFeedManager;

/// Application shell: top header, sidebar, and the active screen.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <Sidebar />

                <main class="app-main">
                    {move || match ctx.active_screen.get() {
                        Screen::Posts => view! { <PostList /> }.into_any(),
                        Screen::Tours => view! { <TourList /> }.into_any(),
                        Screen::Pages => view! { <PageList /> }.into_any(),
                        Screen::SiteSettings => view! { <SiteSettingsDetails /> }.into_any(),
                        Screen::Donations => view! { <DonationList /> }.into_any(),
                        Screen::Subscribers => view! { <SubscriberList /> }.into_any(),
                        Screen::Campaigns => view! { <CampaignList /> }.into_any(),
                        Screen::Templates => view! { <TemplateManager on_select=None /> }.into_any(),
                        Screen::RssFeeds => view! { <RssFeedManager /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
