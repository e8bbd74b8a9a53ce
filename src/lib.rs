//! Overlay widgets for graph diagrams embedded in a document.
//!
//! skein_ui renders interactive overlays on top of a graph diagram: a
//! [`FunctionMenu`] of named actions and transient [`Popup`] windows,
//! and fades them in and out with a stepped, timer-driven [`Animator`].
//! The document itself (node tree, event routing, network access) is a
//! collaborator: the host implements the contracts in [`core::host`] and
//! drives everything from its own single-threaded event loop.
//!
//! # Overview
//!
//! Wire the menu up once when the document loads, then show it from an
//! interaction handler:
//!
//! ```ignore
//! use skein_ui::menu::{Actions, Config};
//! use skein_ui::{Animator, FunctionMenu, Popup, TextBlock};
//!
//! let animator = Animator::shared(Some(driver));
//! let menu = Rc::new(FunctionMenu::new(Rc::clone(&animator)));
//!
//! let actions = Actions::new().entry("Get IP address", {
//!     let menu = Rc::clone(&menu);
//!     move |surface| {
//!         // Look something up about menu.current_element(), then show
//!         // the answer:
//!         let content = TextBlock::from_string("10.1.2.3").attach(surface);
//!         let _ = Popup::open(surface, &animator, content, Default::default());
//!         menu.hide(surface, None);
//!     }
//! });
//!
//! menu.create(surface, Config::default().actions(actions));
//!
//! node_clicks.add_function("show_menu", {
//!     let menu = Rc::clone(&menu);
//!     Rc::new(move |surface, event| menu.show(surface, Some(event)))
//! });
//! ```
//!
//! Widgets never block: `create`, `show`, and `open` return immediately and
//! the visible effect plays out on the animator's ticks.

pub use skein_ui_core as core;
pub use skein_ui_widget as widget;

pub use crate::core::{Animator, Fade, NodeId, Point, Rectangle, Surface, Vector};
pub use crate::widget::{CapacityExceeded, FunctionMenu, Grid, Popup, TextBlock};

pub use crate::widget::menu;
pub use crate::widget::popup;
