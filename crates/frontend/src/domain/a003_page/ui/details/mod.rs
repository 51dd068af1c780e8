mod model;
mod view;
mod view_model;

pub use view::PageDetails;
pub use view_model::PageDetailsViewModel;
