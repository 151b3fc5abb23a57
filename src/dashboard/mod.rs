pub mod format;
pub mod view;
pub mod loader;

pub use loader::load_dashboard;
pub use view::{DashboardView, DisplaySettings};
