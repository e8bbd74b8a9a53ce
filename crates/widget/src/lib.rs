//! The overlay widgets of skein_ui.
//!
//! Two widgets render on top of the graph diagram: the [`FunctionMenu`], a
//! single persistent menu of named actions bound to the element that opened
//! it, and the [`Popup`], a transient window framing caller-supplied
//! content. Both delegate their visibility transitions to the shared
//! [`Animator`] and build their visual subtrees through the host
//! [`Surface`].
//!
//! [`Animator`]: skein_ui_core::Animator
//! [`Surface`]: skein_ui_core::Surface

pub mod grid;
pub mod menu;
pub mod popup;
pub mod text;

pub use grid::{CapacityExceeded, Grid};
pub use menu::FunctionMenu;
pub use popup::Popup;
pub use text::TextBlock;
