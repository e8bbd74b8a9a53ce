//! Stepped opacity fades.
//!
//! Fades are not eased or duration-based: a run applies a fixed opacity
//! step on every tick of a fixed-interval clock and stops the first time
//! its continue-predicate fails. The host drives the clock through the
//! [`Driver`] contract and calls [`Animator::tick`] at the requested
//! cadence; between ticks, control stays with the host loop and nothing
//! blocks.
//!
//! Every widget tracks the [`RunId`] of its in-flight fade and cancels it
//! before starting a replacement, so no two runs ever write the opacity of
//! the same node.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::NodeId;
use crate::host::{Driver, Surface};

/// A callback invoked exactly once, after the last opacity update of a run.
pub type OnComplete = Box<dyn FnOnce(&mut dyn Surface)>;

slotmap::new_key_type! {
    /// A handle naming one in-flight fade run.
    pub struct RunId;
}

/// An opacity transition: where to start, where to stop, how fast to move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    /// The opacity applied when the run starts.
    pub from: f32,
    /// The opacity the run moves toward.
    pub to: f32,
    /// The signed opacity increment applied per tick.
    ///
    /// Must move `from` toward `to`; a step pointing the wrong way never
    /// terminates.
    pub step: f32,
}

impl Fade {
    /// Fades from invisible to fully opaque.
    pub const IN: Fade = Fade {
        from: 0.0,
        to: 1.0,
        step: 0.1,
    };

    /// Fades from fully opaque to invisible.
    pub const OUT: Fade = Fade {
        from: 1.0,
        to: 0.0,
        step: -0.1,
    };

    /// Returns whether a run at `current` should keep going.
    ///
    /// Strictly less-than when fading in, strictly greater-than when fading
    /// out. The comparison is strict, so the final applied value may differ
    /// from [`to`](Fade::to) by up to one step; runs are stopped by this
    /// predicate, not clamped.
    #[must_use]
    pub fn continues(&self, current: f32) -> bool {
        if self.step >= 0.0 {
            current < self.to
        } else {
            current > self.to
        }
    }
}

struct Run {
    node: NodeId,
    current: f32,
    fade: Fade,
    on_complete: Option<OnComplete>,
}

/// The engine advancing every in-flight [`Fade`].
///
/// One animator serves the whole document. Starting a run when the engine
/// was idle asks the installed [`Driver`] for ticks at
/// [`TICK_INTERVAL`](Animator::TICK_INTERVAL); retiring the last run stops
/// the driver again.
pub struct Animator {
    runs: slotmap::SlotMap<RunId, Run>,
    driver: Option<Box<dyn Driver>>,
}

/// An [`Animator`] shared between widgets and their interaction handlers.
pub type SharedAnimator = Rc<RefCell<Animator>>;

impl Animator {
    /// The fixed cadence at which the host must deliver ticks.
    pub const TICK_INTERVAL: Duration = Duration::from_millis(20);

    /// Creates an idle [`Animator`] without a driver.
    ///
    /// Use this when the host calls [`tick`](Animator::tick) on its own
    /// schedule and does not care when the engine is idle.
    #[must_use]
    pub fn new() -> Self {
        Self {
            runs: slotmap::SlotMap::with_key(),
            driver: None,
        }
    }

    /// Creates an idle [`Animator`] that starts and stops the given driver.
    #[must_use]
    pub fn with_driver(driver: Box<dyn Driver>) -> Self {
        Self {
            runs: slotmap::SlotMap::with_key(),
            driver: Some(driver),
        }
    }

    /// Creates an [`Animator`] ready to be shared with widgets.
    #[must_use]
    pub fn shared(driver: Option<Box<dyn Driver>>) -> SharedAnimator {
        let animator = match driver {
            Some(driver) => Self::with_driver(driver),
            None => Self::new(),
        };

        Rc::new(RefCell::new(animator))
    }

    /// Starts a fade run on `node`.
    ///
    /// The start opacity is applied to the node immediately; every later
    /// update happens on a tick. `on_complete` is invoked exactly once,
    /// after the last applied update, and never before.
    pub fn start(
        &mut self,
        surface: &mut dyn Surface,
        node: NodeId,
        fade: Fade,
        on_complete: Option<OnComplete>,
    ) -> RunId {
        if fade.step == 0.0 || (fade.to - fade.from) * fade.step < 0.0 {
            log::warn!(
                "Animator: step {} does not move opacity from {} toward {}",
                fade.step,
                fade.from,
                fade.to
            );
        }

        surface.set_opacity(node, fade.from);

        let was_idle = self.runs.is_empty();
        let id = self.runs.insert(Run {
            node,
            current: fade.from,
            fade,
            on_complete,
        });

        if was_idle {
            if let Some(driver) = self.driver.as_mut() {
                driver.start(Self::TICK_INTERVAL);
            }
        }

        id
    }

    /// Starts a [`Fade::IN`] run on `node`.
    pub fn fade_in(
        &mut self,
        surface: &mut dyn Surface,
        node: NodeId,
        on_complete: Option<OnComplete>,
    ) -> RunId {
        self.start(surface, node, Fade::IN, on_complete)
    }

    /// Starts a [`Fade::OUT`] run on `node`.
    pub fn fade_out(
        &mut self,
        surface: &mut dyn Surface,
        node: NodeId,
        on_complete: Option<OnComplete>,
    ) -> RunId {
        self.start(surface, node, Fade::OUT, on_complete)
    }

    /// Drops a run without invoking its completion callback.
    ///
    /// Returns whether the run was still live. Widgets call this before
    /// starting a replacement fade on the same node; the replacement's
    /// completion is the one that settles the widget's state.
    pub fn cancel(&mut self, run: RunId) -> bool {
        let live = self.runs.remove(run).is_some();

        if live && self.runs.is_empty() {
            if let Some(driver) = self.driver.as_mut() {
                driver.stop();
            }
        }

        live
    }

    /// Advances every run by one tick.
    ///
    /// A run whose predicate still holds gets its current opacity applied
    /// to its node and its value advanced by one step. A run whose
    /// predicate fails is retired: its completion callback fires and no
    /// further tick touches it.
    pub fn tick(&mut self, surface: &mut dyn Surface) {
        let mut finished = Vec::new();

        for (id, run) in &mut self.runs {
            if run.fade.continues(run.current) {
                surface.set_opacity(run.node, run.current);
                run.current += run.fade.step;
            } else {
                finished.push(id);
            }
        }

        for id in finished {
            if let Some(mut run) = self.runs.remove(id) {
                if let Some(on_complete) = run.on_complete.take() {
                    on_complete(surface);
                }
            }
        }

        if self.runs.is_empty() {
            if let Some(driver) = self.driver.as_mut() {
                driver.stop();
            }
        }
    }

    /// Returns whether no run is in flight.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.runs.is_empty()
    }

    /// Returns the number of runs in flight.
    #[must_use]
    pub fn active_runs(&self) -> usize {
        self.runs.len()
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Animator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Animator")
            .field("active_runs", &self.runs.len())
            .field("has_driver", &self.driver.is_some())
            .finish()
    }
}
