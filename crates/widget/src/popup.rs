//! A transient overlay window framing caller-supplied content.

use std::cell::Cell;
use std::rc::Rc;

use skein_ui_core::animation::RunId;
use skein_ui_core::{NodeId, Point, Rectangle, SharedAnimator, Surface, Vector, pointer};

/// Geometry overrides for [`Popup::open`].
///
/// Every field is optional; missing fields take the documented defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    x: Option<f32>,
    y: Option<f32>,
    width: Option<f32>,
    height: Option<f32>,
    rx: Option<f32>,
    ry: Option<f32>,
}

impl Config {
    /// Sets the X coordinate of the top-left corner.
    ///
    /// Defaults to horizontally centering the popup on the view center.
    #[must_use]
    pub fn x(mut self, x: f32) -> Self {
        self.x = Some(x);
        self
    }

    /// Sets the Y coordinate of the top-left corner.
    ///
    /// Defaults to one popup height above the view center.
    #[must_use]
    pub fn y(mut self, y: f32) -> Self {
        self.y = Some(y);
        self
    }

    /// Sets the width. Defaults to `500`.
    ///
    /// The popup does not size itself after its content; a caller with
    /// bigger content supplies a bigger width.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the height. Defaults to `300`.
    #[must_use]
    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Sets the horizontal corner radius. Defaults to `10`.
    #[must_use]
    pub fn rx(mut self, rx: f32) -> Self {
        self.rx = Some(rx);
        self
    }

    /// Sets the vertical corner radius. Defaults to `10`.
    #[must_use]
    pub fn ry(mut self, ry: f32) -> Self {
        self.ry = Some(ry);
        self
    }
}

/// A transient, independently dismissible overlay window.
///
/// A popup wraps a caller-owned content subtree with a background panel, a
/// title bar, and a close button. It fades in as soon as it is opened, and
/// closing it is terminal: the fade-out's completion detaches the whole
/// subtree from the document. Popups are independent of each other; open
/// as many as needed and keep the returned handles to track them.
#[derive(Debug, Clone)]
pub struct Popup {
    node: NodeId,
    active: Rc<Cell<Option<RunId>>>,
}

impl Popup {
    const TITLE_BAR_HEIGHT: f32 = 25.0;
    const TITLE_BAR_OFFSET: f32 = 25.0;
    const CLOSE_BUTTON_INSET: f32 = 12.0;
    const CLOSE_BUTTON_RADIUS: f32 = 10.0;

    /// Opens a popup framing `content` and starts its fade-in.
    ///
    /// `content` is embedded via a translation that puts its origin at the
    /// popup's horizontal center, just below the title bar; the subtree
    /// itself is never modified. The popup attaches to the document root
    /// and returns immediately; the fade-in plays out on later ticks.
    pub fn open(
        surface: &mut dyn Surface,
        animator: &SharedAnimator,
        content: NodeId,
        config: Config,
    ) -> Self {
        let center = surface.view_center();

        let width = config.width.unwrap_or(500.0);
        let height = config.height.unwrap_or(300.0);
        let x = config.x.unwrap_or(center.x - width / 2.0);
        let y = config.y.unwrap_or(center.y - height);
        let rx = config.rx.unwrap_or(10.0);
        let ry = config.ry.unwrap_or(10.0);

        let popup = surface.group();
        surface.set_opacity(popup, 0.0);

        let background = surface.rect(Rectangle::new(x, y, width, height), rx, ry);
        surface.set_class(background, "window");

        surface.set_translation(
            content,
            Vector::new(
                x + width / 2.0,
                y + Self::TITLE_BAR_HEIGHT + Self::TITLE_BAR_OFFSET,
            ),
        );

        let title_bar = surface.rect(Rectangle::new(x, y, width, Self::TITLE_BAR_HEIGHT), 0.0, 0.0);
        surface.set_class(title_bar, "titlebar");

        let close = surface.circle(
            Point::new(x + width - Self::CLOSE_BUTTON_INSET, y + Self::CLOSE_BUTTON_INSET),
            Self::CLOSE_BUTTON_RADIUS,
        );
        surface.set_class(close, "button");

        surface.append(popup, background);
        surface.append(popup, content);
        surface.append(popup, title_bar);
        surface.append(popup, close);

        let active = Rc::new(Cell::new(None));

        {
            let animator = Rc::clone(animator);
            let active = Rc::clone(&active);
            surface.on_click(
                close,
                Rc::new(move |surface: &mut dyn Surface, _event: &pointer::Event| {
                    dismiss(surface, &animator, &active, popup);
                }),
            );
        }

        let root = surface.root();
        surface.append(root, popup);

        let run = animator.borrow_mut().fade_in(surface, popup, None);
        active.set(Some(run));

        Self {
            node: popup,
            active,
        }
    }

    /// The popup's root node on the surface.
    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Dismisses the popup, exactly as its close button does.
    ///
    /// The fade-out's completion detaches the subtree; the handle is dead
    /// afterwards.
    pub fn close(&self, surface: &mut dyn Surface, animator: &SharedAnimator) {
        dismiss(surface, animator, &self.active, self.node);
    }
}

fn dismiss(
    surface: &mut dyn Surface,
    animator: &SharedAnimator,
    active: &Rc<Cell<Option<RunId>>>,
    node: NodeId,
) {
    // Replace whatever fade is still touching the popup, including the
    // opening fade-in.
    if let Some(run) = active.take() {
        let _ = animator.borrow_mut().cancel(run);
    }

    let run = animator.borrow_mut().fade_out(
        surface,
        node,
        Some(Box::new(move |surface| surface.detach(node))),
    );
    active.set(Some(run));
}
