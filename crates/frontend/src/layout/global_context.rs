use leptos::prelude::*;

/// Every top-level screen reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Posts,
    Tours,
    Pages,
    SiteSettings,
    Donations,
    Subscribers,
    Campaigns,
    Templates,
    RssFeeds,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Posts => "Posts",
            Screen::Tours => "Tours",
            Screen::Pages => "Pages",
            Screen::SiteSettings => "Site Settings",
            Screen::Donations => "Donations",
            Screen::Subscribers => "Subscribers",
            Screen::Campaigns => "Campaigns",
            Screen::Templates => "Email Templates",
            Screen::RssFeeds => "RSS Feeds",
        }
    }
}

/// App-wide UI state shared through context.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_screen: RwSignal<Screen>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_screen: RwSignal::new(Screen::Posts),
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
