pub mod api_utils;
pub mod date_utils;
pub mod debounce;
pub mod export;
pub mod files;
pub mod icons;
pub mod slug;
