use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use skein_ui_core::host::{Method, Registry, Request, Surface, TimedRegistry};
use skein_ui_core::{Animator, Point, Vector, keyboard, pointer};

use crate::{RecordingDriver, Simulator, StubRegistry, StubRequest, StubTimed};

#[test]
fn fade_in_reaches_target_and_completes_once() {
    let mut surface = Simulator::new();
    let animator = Animator::shared(None);

    let node = surface.group();
    let completions = Rc::new(Cell::new(0));

    let counter = Rc::clone(&completions);
    let _ = animator.borrow_mut().fade_in(
        &mut surface,
        node,
        Some(Box::new(move |_surface| counter.set(counter.get() + 1))),
    );

    assert_eq!(surface.opacity(node), Some(0.0));

    surface.run_fades(&animator);

    assert!(surface.opacity(node).unwrap() >= 0.9);
    assert_eq!(completions.get(), 1);

    // Once retired, a run never ticks again.
    surface.tick(&animator);
    assert_eq!(completions.get(), 1);
}

#[test]
fn completion_runs_strictly_after_the_last_update() {
    let mut surface = Simulator::new();
    let animator = Animator::shared(None);

    let node = surface.group();
    let completions = Rc::new(Cell::new(0));

    let counter = Rc::clone(&completions);
    let _ = animator.borrow_mut().fade_in(
        &mut surface,
        node,
        Some(Box::new(move |_surface| counter.set(counter.get() + 1))),
    );

    let mut previous = surface.opacity(node).unwrap();

    for _ in 0..1_000 {
        if completions.get() > 0 {
            break;
        }

        surface.tick(&animator);

        let current = surface.opacity(node).unwrap();

        if completions.get() > 0 {
            // The completing tick applies no further update.
            assert_eq!(current, previous);
        } else {
            assert!(current >= previous);
        }

        previous = current;
    }

    assert_eq!(completions.get(), 1);
}

#[test]
fn fade_out_cleanup_runs_exactly_once() {
    let mut surface = Simulator::new();
    let animator = Animator::shared(None);

    let node = surface.group();
    let root = surface.root();
    surface.append(root, node);

    let cleanups = Rc::new(Cell::new(0));
    let counter = Rc::clone(&cleanups);
    let _ = animator.borrow_mut().fade_out(
        &mut surface,
        node,
        Some(Box::new(move |surface| {
            counter.set(counter.get() + 1);
            surface.detach(node);
        })),
    );

    // The widget is not gone until the cleanup runs.
    surface.tick(&animator);
    assert!(surface.is_attached(node));

    surface.run_fades(&animator);

    assert_eq!(cleanups.get(), 1);
    assert!(!surface.is_attached(node));
}

#[test]
fn cancelled_run_never_completes() {
    let mut surface = Simulator::new();
    let animator = Animator::shared(None);

    let node = surface.group();
    let completions = Rc::new(Cell::new(0));

    let counter = Rc::clone(&completions);
    let run = animator.borrow_mut().fade_in(
        &mut surface,
        node,
        Some(Box::new(move |_surface| counter.set(counter.get() + 1))),
    );

    surface.tick(&animator);
    assert!(animator.borrow_mut().cancel(run));

    surface.run_fades(&animator);
    assert_eq!(completions.get(), 0);

    // Cancelling again reports the run as already gone.
    assert!(!animator.borrow_mut().cancel(run));
}

#[test]
fn driver_runs_only_while_fades_are_active() {
    let mut surface = Simulator::new();
    let driver = RecordingDriver::new();
    let probe = driver.probe();
    let animator = Animator::shared(Some(Box::new(driver)));

    assert!(!probe.is_started());

    let node = surface.group();
    let _ = animator.borrow_mut().fade_in(&mut surface, node, None);

    assert_eq!(probe.interval(), Some(Animator::TICK_INTERVAL));

    surface.run_fades(&animator);

    assert!(!probe.is_started());
}

#[test]
fn concurrent_runs_touch_only_their_own_nodes() {
    let mut surface = Simulator::new();
    let animator = Animator::shared(None);

    let first = surface.group();
    let second = surface.group();

    let _ = animator.borrow_mut().fade_in(&mut surface, first, None);
    let _ = animator.borrow_mut().fade_out(&mut surface, second, None);

    surface.run_fades(&animator);

    assert!(surface.opacity(first).unwrap() >= 0.9);
    assert!(surface.opacity(second).unwrap() <= 0.1);
}

#[test]
fn append_moves_an_attached_node() {
    let mut surface = Simulator::new();
    let root = surface.root();

    let first = surface.group();
    let second = surface.group();
    let child = surface.circle(Point::ORIGIN, 5.0);

    surface.append(root, first);
    surface.append(root, second);
    surface.append(first, child);
    surface.append(second, child);

    assert_eq!(surface.children(first), &[]);
    assert_eq!(surface.children(second), &[child]);
}

#[test]
fn detach_removes_the_whole_subtree() {
    let mut surface = Simulator::new();
    let root = surface.root();

    let group = surface.group();
    let text = surface.text(Point::ORIGIN, "row");
    surface.append(root, group);
    surface.append(group, text);

    surface.detach(group);

    assert!(!surface.is_attached(group));
    assert!(surface.shape(text).is_none());
}

#[test]
fn event_element_resolves_through_groups() {
    let mut surface = Simulator::new();
    let root = surface.root();

    let wrapper = surface.group();
    let ellipse = surface.circle(Point::ORIGIN, 10.0);
    surface.append(root, wrapper);
    surface.append(wrapper, ellipse);

    let event = pointer::Event::new(wrapper, Point::ORIGIN);
    assert_eq!(surface.event_element(&event), Some(ellipse));

    let direct = pointer::Event::new(ellipse, Point::ORIGIN);
    assert_eq!(surface.event_element(&direct), Some(ellipse));
}

#[test]
fn to_root_coords_applies_the_scroll_offset() {
    let mut surface = Simulator::new();
    surface.set_scroll(Vector::new(10.0, -20.0));

    let mapped = surface.to_root_coords(Point::new(100.0, 100.0));
    assert_eq!(mapped, Point::new(110.0, 80.0));
}

#[test]
fn registry_dispatches_in_registration_order() {
    let mut surface = Simulator::new();
    let mut registry = StubRegistry::<pointer::Event>::new();

    let order = Rc::new(std::cell::RefCell::new(Vec::new()));

    for name in ["first", "second"] {
        let order = Rc::clone(&order);
        registry.add_function(
            name,
            Rc::new(move |_surface, _event| order.borrow_mut().push(name)),
        );
    }

    let target = surface.group();
    registry.dispatch(&mut surface, &pointer::Event::new(target, Point::ORIGIN));

    assert_eq!(*order.borrow(), vec!["first", "second"]);

    assert!(registry.remove_function("first"));
    assert!(!registry.remove_function("first"));
    assert!(!registry.contains("first"));
}

#[test]
fn timed_registry_tracks_the_timer_and_fires_handlers() {
    let mut surface = Simulator::new();
    let mut timed = StubTimed::new();

    let fired = Rc::new(Cell::new(0));
    let counter = Rc::clone(&fired);
    timed.add_function(
        "heartbeat",
        Rc::new(move |_surface| counter.set(counter.get() + 1)),
    );

    assert_eq!(timed.interval(), None);

    timed.start_timer(Duration::from_secs(5));
    assert_eq!(timed.interval(), Some(Duration::from_secs(5)));

    timed.fire(&mut surface);
    timed.fire(&mut surface);
    assert_eq!(fired.get(), 2);

    timed.stop_timer();
    assert_eq!(timed.interval(), None);
}

#[test]
fn stub_request_answers_in_order() {
    let mut surface = Simulator::new();
    let mut requests = StubRequest::new();

    let bodies = Rc::new(std::cell::RefCell::new(Vec::new()));

    for url in ["/first", "/second"] {
        let bodies = Rc::clone(&bodies);
        requests.request(
            Method::Get,
            url,
            Box::new(move |_surface, body| bodies.borrow_mut().push(body.to_owned())),
        );
    }

    assert_eq!(requests.pending(), 2);
    assert_eq!(requests.sent().len(), 2);
    assert_eq!(requests.sent()[0], (Method::Get, "/first".to_owned()));

    assert!(requests.respond(&mut surface, "alpha"));
    assert!(requests.respond(&mut surface, "beta"));
    assert!(!requests.respond(&mut surface, "ignored"));

    assert_eq!(*bodies.borrow(), vec!["alpha", "beta"]);
}

#[test]
fn key_up_reaches_every_document_handler() {
    let mut surface = Simulator::new();

    let seen = Rc::new(Cell::new(0));
    for _ in 0..2 {
        let seen = Rc::clone(&seen);
        surface.on_key_up(Rc::new(move |_surface, key: &keyboard::Key| {
            if key.is_named(keyboard::Named::Escape) {
                seen.set(seen.get() + 1);
            }
        }));
    }

    surface.key_up(keyboard::Key::Named(keyboard::Named::Escape));
    surface.key_up(keyboard::Key::Character("q".into()));

    assert_eq!(seen.get(), 2);
}
