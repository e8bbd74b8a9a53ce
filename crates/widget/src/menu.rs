//! The function menu.
//!
//! A single persistent overlay listing named actions that operate on the
//! graph element that most recently opened the menu. The menu is built once
//! with [`FunctionMenu::create`] and then shown and hidden any number of
//! times; visibility transitions are fades delegated to the shared
//! [`Animator`](skein_ui_core::Animator).

use std::cell::RefCell;
use std::rc::Rc;

use skein_ui_core::animation::RunId;
use skein_ui_core::keyboard::Named;
use skein_ui_core::{NodeId, Point, Rectangle, SharedAnimator, Surface, pointer};
use smol_str::SmolStr;

use crate::grid::{CapacityExceeded, Grid};

/// A zero-argument menu action.
///
/// Actions receive the [`Surface`] so they can open popups, style elements,
/// or hide the menu; what an action actually does is entirely the caller's
/// business.
pub type Action = Rc<dyn Fn(&mut dyn Surface)>;

/// An ordered collection of labeled menu actions.
///
/// Insertion order defines layout order. Labels are unique: inserting a
/// label twice replaces the callback while keeping the original position.
#[derive(Clone, Default)]
pub struct Actions {
    entries: Vec<(SmolStr, Action)>,
}

impl Actions {
    /// Creates an empty action set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds (or replaces) the action registered under `label`.
    #[must_use]
    pub fn entry(
        mut self,
        label: impl Into<SmolStr>,
        action: impl Fn(&mut dyn Surface) + 'static,
    ) -> Self {
        let label = label.into();
        let action: Action = Rc::new(action);

        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| *name == label) {
            entry.1 = action;
        } else {
            self.entries.push((label, action));
        }

        self
    }

    /// The number of actions in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the set holds no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the actions in layout order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Action)> {
        self.entries
            .iter()
            .map(|(label, action)| (label.as_str(), action))
    }
}

impl std::fmt::Debug for Actions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(label, _)| label))
            .finish()
    }
}

/// Configuration for [`FunctionMenu::create`].
///
/// Every field is optional; missing fields take the documented defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    x: Option<f32>,
    y: Option<f32>,
    rx: Option<f32>,
    ry: Option<f32>,
    width: Option<f32>,
    height: Option<f32>,
    actions: Option<Actions>,
}

impl Config {
    /// Sets the X coordinate of the top-left corner.
    ///
    /// Defaults to horizontally centering the menu on the view center.
    #[must_use]
    pub fn x(mut self, x: f32) -> Self {
        self.x = Some(x);
        self
    }

    /// Sets the Y coordinate of the top-left corner. Defaults to `0`.
    #[must_use]
    pub fn y(mut self, y: f32) -> Self {
        self.y = Some(y);
        self
    }

    /// Sets the horizontal corner radius. Defaults to `5`.
    #[must_use]
    pub fn rx(mut self, rx: f32) -> Self {
        self.rx = Some(rx);
        self
    }

    /// Sets the vertical corner radius. Defaults to `5`.
    #[must_use]
    pub fn ry(mut self, ry: f32) -> Self {
        self.ry = Some(ry);
        self
    }

    /// Sets the width. Defaults to `800`.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the height. Defaults to `400`.
    #[must_use]
    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Sets the initial action set.
    #[must_use]
    pub fn actions(mut self, actions: Actions) -> Self {
        self.actions = Some(actions);
        self
    }
}

/// The visibility lifecycle of a created menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Not rendered.
    Hidden,
    /// Rendered, fade-in in flight.
    FadingIn,
    /// Rendered at full opacity.
    Visible,
    /// Still rendered, fade-out in flight.
    FadingOut,
}

#[derive(Debug)]
struct Inner {
    bounds: Rectangle,
    node: NodeId,
    action_group: Option<NodeId>,
    actions: Actions,
    grid: Grid,
    visibility: Visibility,
    current_target: Option<NodeId>,
    run: Option<RunId>,
}

type SharedInner = Rc<RefCell<Option<Inner>>>;

/// The singleton function menu of a document.
///
/// A fresh instance is uninitialized and has no surface footprint;
/// [`create`](FunctionMenu::create) builds it. Operations invoked before
/// `create` are silent no-ops, since there is nothing to show or hide yet.
#[derive(Debug)]
pub struct FunctionMenu {
    animator: SharedAnimator,
    inner: SharedInner,
}

impl FunctionMenu {
    const CLOSE_TEXT_WIDTH_OFFSET: f32 = 50.0;
    const CLOSE_TEXT_HEIGHT_OFFSET: f32 = 10.0;

    /// Creates an uninitialized menu bound to the shared animator.
    #[must_use]
    pub fn new(animator: SharedAnimator) -> Self {
        Self {
            animator,
            inner: Rc::new(RefCell::new(None)),
        }
    }

    /// Builds the menu in the document.
    ///
    /// Constructs the container, background panel, and "Close" affordance,
    /// lays out the configured actions, and registers the document-level
    /// key-up listener that hides the menu on escape. The menu starts
    /// hidden.
    ///
    /// An action set exceeding the grid capacity is reported through
    /// [`Surface::notify`] and dropped; the menu is still created. Calling
    /// `create` on an already-created menu keeps the existing one.
    pub fn create(&self, surface: &mut dyn Surface, config: Config) {
        let mut slot = self.inner.borrow_mut();

        if slot.is_some() {
            log::warn!("FunctionMenu: create called twice; keeping the existing menu");
            return;
        }

        let center = surface.view_center();
        let width = config.width.unwrap_or(800.0);
        let height = config.height.unwrap_or(400.0);
        let x = config.x.unwrap_or(center.x - width / 2.0);
        let y = config.y.unwrap_or(0.0);
        let rx = config.rx.unwrap_or(5.0);
        let ry = config.ry.unwrap_or(5.0);
        let bounds = Rectangle::new(x, y, width, height);

        let menu = surface.group();
        surface.set_display(menu, false);
        surface.set_opacity(menu, 0.0);

        let background = surface.rect(bounds, rx, ry);
        surface.set_class(background, "window");
        surface.append(menu, background);

        let close = surface.text(
            Point::new(
                x + width - Self::CLOSE_TEXT_WIDTH_OFFSET,
                y + height - Self::CLOSE_TEXT_HEIGHT_OFFSET,
            ),
            "Close",
        );
        surface.set_class(close, "menu_text");
        surface.append(menu, close);

        {
            let inner = Rc::clone(&self.inner);
            let animator = Rc::clone(&self.animator);
            surface.on_click(
                close,
                Rc::new(move |surface: &mut dyn Surface, _event: &pointer::Event| {
                    hide(&inner, &animator, surface, None);
                }),
            );
        }

        let mut state = Inner {
            bounds,
            node: menu,
            action_group: None,
            actions: Actions::new(),
            grid: Grid::default(),
            visibility: Visibility::Hidden,
            current_target: None,
            run: None,
        };

        if let Some(actions) = config.actions {
            state.actions = actions;

            if let Err(error) = build_action_group(surface, &mut state) {
                state.actions = Actions::new();
                surface.notify(&error.to_string());
                log::warn!("FunctionMenu: {error}");
            }
        }

        let root = surface.root();
        surface.append(root, menu);

        *slot = Some(state);
        drop(slot);

        let inner = Rc::clone(&self.inner);
        let animator = Rc::clone(&self.animator);
        surface.on_key_up(Rc::new(move |surface, key| {
            if key.is_named(Named::Escape) {
                hide(&inner, &animator, surface, None);
            }
        }));
    }

    /// Makes the menu renderable and starts its fade-in.
    ///
    /// When `event` is supplied, its target becomes the menu's current
    /// element. A fade already in flight is replaced. Does nothing before
    /// [`create`](FunctionMenu::create).
    pub fn show(&self, surface: &mut dyn Surface, event: Option<&pointer::Event>) {
        let mut slot = self.inner.borrow_mut();

        let Some(state) = slot.as_mut() else {
            log::debug!("FunctionMenu: show before create is a no-op");
            return;
        };

        if let Some(event) = event {
            state.current_target = Some(event.target);
        }

        surface.set_display(state.node, true);

        if let Some(run) = state.run.take() {
            let _ = self.animator.borrow_mut().cancel(run);
        }

        state.visibility = Visibility::FadingIn;

        let inner = Rc::clone(&self.inner);
        let run = self.animator.borrow_mut().fade_in(
            surface,
            state.node,
            Some(Box::new(move |_surface| {
                if let Some(state) = inner.borrow_mut().as_mut() {
                    state.visibility = Visibility::Visible;
                    state.run = None;
                }
            })),
        );
        state.run = Some(run);
    }

    /// Starts a fade-out whose completion makes the menu non-renderable.
    ///
    /// When `event` is supplied, its target becomes the menu's current
    /// element. Hiding an already-hidden menu is harmless; hiding before
    /// [`create`](FunctionMenu::create) does nothing.
    pub fn hide(&self, surface: &mut dyn Surface, event: Option<&pointer::Event>) {
        hide(&self.inner, &self.animator, surface, event);
    }

    /// Replaces the action set and lays it out again.
    ///
    /// The previous action group is detached from the document first, so
    /// nothing leaks across rebuilds. On [`CapacityExceeded`] the menu is
    /// left without actions and the error is returned for the caller to
    /// handle. Does nothing before [`create`](FunctionMenu::create).
    pub fn add_functions(
        &self,
        surface: &mut dyn Surface,
        actions: Actions,
    ) -> Result<(), CapacityExceeded> {
        let mut slot = self.inner.borrow_mut();

        let Some(state) = slot.as_mut() else {
            log::debug!("FunctionMenu: add_functions before create is a no-op");
            return Ok(());
        };

        detach_action_group(surface, state);
        state.actions = actions;

        if let Err(error) = build_action_group(surface, state) {
            state.actions = Actions::new();
            return Err(error);
        }

        Ok(())
    }

    /// Detaches the action group and clears the action set.
    pub fn remove_functions(&self, surface: &mut dyn Surface) {
        let mut slot = self.inner.borrow_mut();

        let Some(state) = slot.as_mut() else {
            log::debug!("FunctionMenu: remove_functions before create is a no-op");
            return;
        };

        detach_action_group(surface, state);
        state.actions = Actions::new();
    }

    /// The element that most recently opened or closed the menu.
    ///
    /// Lookup only: the menu never owns the element, and the handle may
    /// have gone stale if the host dropped it.
    #[must_use]
    pub fn current_element(&self) -> Option<NodeId> {
        self.inner.borrow().as_ref().and_then(|state| state.current_target)
    }

    /// The menu's visibility, or `None` before
    /// [`create`](FunctionMenu::create).
    #[must_use]
    pub fn visibility(&self) -> Option<Visibility> {
        self.inner.borrow().as_ref().map(|state| state.visibility)
    }
}

fn hide(
    inner: &SharedInner,
    animator: &SharedAnimator,
    surface: &mut dyn Surface,
    event: Option<&pointer::Event>,
) {
    let mut slot = inner.borrow_mut();

    let Some(state) = slot.as_mut() else {
        log::debug!("FunctionMenu: hide before create is a no-op");
        return;
    };

    if let Some(event) = event {
        state.current_target = Some(event.target);
    }

    if let Some(run) = state.run.take() {
        let _ = animator.borrow_mut().cancel(run);
    }

    state.visibility = Visibility::FadingOut;

    let node = state.node;
    let inner = Rc::clone(inner);
    let run = animator.borrow_mut().fade_out(
        surface,
        node,
        Some(Box::new(move |surface| {
            surface.set_display(node, false);

            if let Some(state) = inner.borrow_mut().as_mut() {
                state.visibility = Visibility::Hidden;
                state.run = None;
            }
        })),
    );
    state.run = Some(run);
}

fn build_action_group(surface: &mut dyn Surface, state: &mut Inner) -> Result<(), CapacityExceeded> {
    let slots = state.grid.arrange(state.actions.len(), state.bounds.position())?;

    let group = surface.group();

    for ((label, action), slot) in state.actions.iter().zip(slots) {
        let text = surface.text(slot, label);
        surface.set_class(text, "menu_text");

        let action = Rc::clone(action);
        surface.on_click(
            text,
            Rc::new(move |surface: &mut dyn Surface, _event: &pointer::Event| action(surface)),
        );

        surface.append(group, text);
    }

    surface.append(state.node, group);
    state.action_group = Some(group);

    Ok(())
}

fn detach_action_group(surface: &mut dyn Surface, state: &mut Inner) {
    if let Some(group) = state.action_group.take() {
        surface.detach(group);
    }
}
