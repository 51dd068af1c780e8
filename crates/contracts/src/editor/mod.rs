//! Campaign editor core: the typed content-block model, the block-list
//! state machine driving the builder UI, and the email HTML generator.

pub mod block;
pub mod block_list;
pub mod editor_data;
pub mod global_styles;
pub mod html;
