//! Pointer interactions delivered by the host document.

use crate::{NodeId, Point};

/// A pointer interaction on a graphical node.
///
/// The same shape is delivered for clicks, pointer-enter, and pointer-leave;
/// which one it was is decided by the registry the handler was added to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The node the interaction landed on.
    pub target: NodeId,

    /// The interaction position, in client coordinates.
    ///
    /// Use [`Surface::to_root_coords`] to map it into the root coordinate
    /// system when the document carries translations.
    ///
    /// [`Surface::to_root_coords`]: crate::Surface::to_root_coords
    pub position: Point,
}

impl Event {
    /// Creates a new pointer [`Event`] on the given target.
    #[must_use]
    pub fn new(target: NodeId, position: Point) -> Self {
        Self { target, position }
    }
}
