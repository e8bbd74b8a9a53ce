//! Contracts of the host document.
//!
//! The document that embeds the graph diagram (its node tree, its event
//! routing, its network access) is not implemented here. Widgets only
//! consume it through the traits in this module; the host implements them
//! and invokes the registered handlers from its own event loop, one at a
//! time, on a single thread.
//!
//! Handlers receive the [`Surface`] as an explicit `&mut dyn Surface`
//! argument instead of capturing it, so the scene can be mutated
//! re-entrantly without shared ownership of the document.

use std::rc::Rc;
use std::time::Duration;

use crate::{NodeId, Point, Rectangle, Vector, keyboard, pointer};

/// A click handler attached to a single node.
pub type ClickHandler = Rc<dyn Fn(&mut dyn Surface, &pointer::Event)>;

/// A document-level key-up handler.
pub type KeyHandler = Rc<dyn Fn(&mut dyn Surface, &keyboard::Key)>;

/// A named handler routed by a [`Registry`].
pub type EventHandler<E> = Rc<dyn Fn(&mut dyn Surface, &E)>;

/// A handler invoked on every firing of the recurring timer of a
/// [`TimedRegistry`].
pub type TimerHandler = Rc<dyn Fn(&mut dyn Surface)>;

/// A one-shot callback receiving the raw body of an asynchronous response.
pub type ResponseHandler = Box<dyn FnOnce(&mut dyn Surface, &str)>;

/// The rendering surface of the host document.
///
/// Nodes form a tree rooted at [`root`](Surface::root). Every node carries
/// an opacity, a display switch, an optional styling class, and an optional
/// translation; the host decides what those mean visually. A detached node
/// and its children are gone; handles naming them go stale.
pub trait Surface {
    /// Creates an empty container node.
    fn group(&mut self) -> NodeId;

    /// Creates a rectangle node with rounded corners.
    fn rect(&mut self, bounds: Rectangle, rx: f32, ry: f32) -> NodeId;

    /// Creates a circle node.
    fn circle(&mut self, center: Point, radius: f32) -> NodeId;

    /// Creates a text node with the given content.
    fn text(&mut self, position: Point, content: &str) -> NodeId;

    /// Appends `child` as the last child of `parent`.
    fn append(&mut self, parent: NodeId, child: NodeId);

    /// Removes `node` (and its subtree) from the document.
    fn detach(&mut self, node: NodeId);

    /// Sets the styling class of a node.
    fn set_class(&mut self, node: NodeId, class: &str);

    /// Sets the opacity of a node, in `[0, 1]`.
    fn set_opacity(&mut self, node: NodeId, opacity: f32);

    /// Sets whether a node is rendered at all.
    ///
    /// A non-displayed node keeps its place in the tree but has no visual
    /// footprint; opacity is irrelevant while display is off.
    fn set_display(&mut self, node: NodeId, display: bool);

    /// Translates a node's local coordinate system by the given offset.
    fn set_translation(&mut self, node: NodeId, offset: Vector);

    /// Attaches a click handler to a node, replacing any previous one.
    fn on_click(&mut self, node: NodeId, handler: ClickHandler);

    /// Adds a document-level key-up handler.
    ///
    /// Handlers accumulate for the lifetime of the document; there is no way
    /// to remove one.
    fn on_key_up(&mut self, handler: KeyHandler);

    /// The root container of the document.
    fn root(&self) -> NodeId;

    /// The center of the visible coordinate space.
    ///
    /// Widgets use this for default positioning.
    fn view_center(&self) -> Point;

    /// Resolves the graphical element an interaction was aimed at.
    ///
    /// Graph nodes and edges are usually wrapped in container groups; this
    /// walks from the raw event target to the element worth styling or
    /// querying. Returns `None` when the target has no such element.
    fn event_element(&self, event: &pointer::Event) -> Option<NodeId>;

    /// Maps a client-space position into the root coordinate system.
    ///
    /// Hosts whose documents carry translations or scrolling implement the
    /// inverse mapping here; hosts without either return the point as-is.
    fn to_root_coords(&self, client: Point) -> Point;

    /// Shows an immediate, user-facing notice.
    fn notify(&mut self, message: &str);
}

/// A named-handler registry for one kind of routed event.
///
/// The host keeps one registry per event source (node clicks, edge clicks,
/// pointer enter/leave, document load, …) and invokes every registered
/// handler when the source fires. Names exist so callers can replace or
/// remove a handler without holding on to it.
pub trait Registry<E> {
    /// Registers `handler` under `name`, replacing a same-named handler.
    fn add_function(&mut self, name: &str, handler: EventHandler<E>);

    /// Removes the handler registered under `name`.
    ///
    /// Returns whether a handler was actually registered under that name.
    fn remove_function(&mut self, name: &str) -> bool;
}

/// The recurring-timer registry of the host.
///
/// Handlers registered here fire on every timer tick while the timer runs.
pub trait TimedRegistry {
    /// Registers `handler` under `name`, replacing a same-named handler.
    fn add_function(&mut self, name: &str, handler: TimerHandler);

    /// Removes the handler registered under `name`.
    ///
    /// Returns whether a handler was actually registered under that name.
    fn remove_function(&mut self, name: &str) -> bool;

    /// Starts (or restarts) the recurring timer with the given interval.
    fn start_timer(&mut self, interval: Duration);

    /// Stops the recurring timer.
    fn stop_timer(&mut self);
}

/// The scheduling capability of the [`Animator`].
///
/// The animator asks the driver to call [`Animator::tick`] at the given
/// cadence while at least one fade is running, and to stop once the last
/// one retires. The host wires the driver to whatever clock it has.
///
/// [`Animator`]: crate::Animator
/// [`Animator::tick`]: crate::Animator::tick
pub trait Driver {
    /// Starts delivering ticks at the given interval.
    fn start(&mut self, interval: Duration);

    /// Stops delivering ticks.
    fn stop(&mut self);
}

/// An HTTP method accepted by [`Request::request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// An HTTP `GET`.
    Get,
    /// An HTTP `POST`.
    Post,
}

impl Method {
    /// The method name on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// The asynchronous request helper of the host.
///
/// Fire-and-forget: `request` returns immediately and the host delivers the
/// raw response body to `on_response` from its event loop, if and when the
/// request succeeds. Failures are the host's to report; no error ever
/// reaches the caller through this interface.
pub trait Request {
    /// Issues an asynchronous request.
    fn request(&mut self, method: Method, url: &str, on_response: ResponseHandler);
}
