//! Stacked text rows for popup content.

use skein_ui_core::{NodeId, Point, Surface};
use smol_str::SmolStr;

/// An immutable block of stacked text rows.
///
/// Rows render top to bottom, each offset by a fixed padding from the
/// previous; the first row sits at offset zero. A block is plain data until
/// [`attach`](TextBlock::attach) realizes it on a [`Surface`].
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    rows: Vec<SmolStr>,
    padding: f32,
}

impl TextBlock {
    /// The default vertical padding between rows.
    pub const DEFAULT_PADDING: f32 = 20.0;

    /// Builds a block with a single row.
    #[must_use]
    pub fn from_string(row: impl Into<SmolStr>) -> Self {
        Self {
            rows: vec![row.into()],
            padding: Self::DEFAULT_PADDING,
        }
    }

    /// Builds a block with one row per entry, in order.
    ///
    /// An empty iterator yields an empty block with zero rows; that is not
    /// an error.
    #[must_use]
    pub fn from_strings<I>(rows: I, padding: f32) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SmolStr>,
    {
        Self {
            rows: rows.into_iter().map(Into::into).collect(),
            padding,
        }
    }

    /// The number of rows in the block.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether the block has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates the rows together with their vertical offsets.
    pub fn offsets(&self) -> impl Iterator<Item = (f32, &str)> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| (i as f32 * self.padding, row.as_str()))
    }

    /// Realizes the block as a group of text nodes on the surface.
    ///
    /// The group is returned detached; the caller decides where it goes,
    /// typically straight into [`Popup::open`].
    ///
    /// [`Popup::open`]: crate::Popup::open
    pub fn attach(&self, surface: &mut dyn Surface) -> NodeId {
        let group = surface.group();

        for (offset, row) in self.offsets() {
            let text = surface.text(Point::new(0.0, offset), row);
            surface.set_class(text, "popup");
            surface.append(group, text);
        }

        group
    }
}
