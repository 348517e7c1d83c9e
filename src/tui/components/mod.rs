// UI components - one file per panel
//
// Components are pure render functions over `&App`; they never mutate
// state. Event handling lives in the event loop, not here.

pub mod cart_panel;
pub mod formatters;
pub mod header;
pub mod logs_panel;
pub mod product_grid;
pub mod status_bar;
mod toast;

pub use toast::{Toast, ToastKind};
