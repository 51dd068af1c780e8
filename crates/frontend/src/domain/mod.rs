pub mod a001_post;
pub mod a002_tour;
pub mod a003_page;
pub mod a004_site_settings;
pub mod a005_donation;
pub mod a006_subscriber;
pub mod a007_campaign;
pub mod a008_email_template;
pub mod a009_rss_feed;
