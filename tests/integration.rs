// SPDX-License-Identifier: MPL-2.0
//! End-to-end viewing session scenarios driven through the coordinator.

use gallery_lens::application::port::media::MediaError;
use gallery_lens::application::port::{MediaStore, NoopSystemChrome, SystemChrome};
use gallery_lens::domain::media::{AssetSequence, MediaId, MediaItem, MediaKind};
use gallery_lens::domain::ui::{Point, SelectionLimit};
use gallery_lens::viewer::subcomponents::zoom::ZOOM_DURATION;
use gallery_lens::viewer::{SessionOutcome, ToggleOutcome, ViewerCoordinator, ViewerOptions};
use gallery_lens::Error;
use std::cell::RefCell;
use std::io::Read;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tokio::sync::oneshot;

struct InMemoryStore;

impl MediaStore for InMemoryStore {
    fn fetch_thumbnail(&self, id: &MediaId) -> Result<Vec<u8>, MediaError> {
        Ok(id.as_str().as_bytes().to_vec())
    }

    fn fetch_full_resolution(&self, id: &MediaId) -> Result<Box<dyn Read>, MediaError> {
        Ok(Box::new(std::io::Cursor::new(
            id.as_str().as_bytes().to_vec(),
        )))
    }
}

fn id(s: &str) -> MediaId {
    MediaId::new(s)
}

fn sequence(names: &[&str]) -> AssetSequence {
    AssetSequence::new(
        names
            .iter()
            .map(|n| MediaItem::new(MediaId::new(*n), MediaKind::Image))
            .collect(),
    )
    .expect("valid sequence")
}

fn platform() -> Rc<dyn SystemChrome> {
    Rc::new(NoopSystemChrome)
}

fn open(
    options: ViewerOptions,
) -> (ViewerCoordinator, oneshot::Receiver<SessionOutcome>) {
    ViewerCoordinator::open(options, platform(), Rc::new(InMemoryStore)).expect("valid options")
}

/// Five items, limit three: toggle A, B, C, then D is rejected, then A is
/// removed; confirming hands [B, C] to the caller.
#[test]
fn bounded_selection_session() {
    let options = ViewerOptions::new(sequence(&["a", "b", "c", "d", "e"]))
        .with_selection(Vec::new(), SelectionLimit::new(3));
    let (mut viewer, mut rx) = open(options);

    assert_eq!(viewer.toggle_selection(&id("a")).unwrap(), ToggleOutcome::Added);
    assert_eq!(viewer.toggle_selection(&id("b")).unwrap(), ToggleOutcome::Added);
    assert_eq!(viewer.toggle_selection(&id("c")).unwrap(), ToggleOutcome::Added);

    assert_eq!(
        viewer.toggle_selection(&id("d")).unwrap(),
        ToggleOutcome::LimitReached
    );
    assert_eq!(viewer.selection_count(), 3);

    assert_eq!(
        viewer.toggle_selection(&id("a")).unwrap(),
        ToggleOutcome::Removed
    );

    let confirmed = viewer.confirm().expect("non-empty selection");
    assert_eq!(confirmed, vec![id("b"), id("c")]);
    assert_eq!(
        rx.try_recv().expect("resolved"),
        SessionOutcome::Confirmed(vec![id("b"), id("c")])
    );
}

/// Ten items, start index 3: a settled swipe to page 7 updates the cursor
/// and delivers exactly one notification with 7 to every subscriber.
#[test]
fn settled_swipe_notifies_every_subscriber_once() {
    let names: Vec<String> = (0..10).map(|i| format!("item-{i}")).collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let options = ViewerOptions::new(sequence(&name_refs)).with_start_index(3);
    let (mut viewer, _rx) = open(options);
    assert_eq!(viewer.current_index(), 3);

    let app_bar = Rc::new(RefCell::new(Vec::new()));
    let filmstrip = Rc::new(RefCell::new(Vec::new()));

    let a = Rc::clone(&app_bar);
    let _sub_a = viewer.subscribe_page(move |i| a.borrow_mut().push(*i));
    let b = Rc::clone(&filmstrip);
    let _sub_b = viewer.subscribe_page(move |i| b.borrow_mut().push(*i));

    // Both got the replay of the current index on attach.
    assert_eq!(*app_bar.borrow(), vec![3]);
    assert_eq!(*filmstrip.borrow(), vec![3]);

    viewer.page_settled(7).expect("in range");

    assert_eq!(viewer.current_index(), 7);
    assert_eq!(*app_bar.borrow(), vec![3, 7]);
    assert_eq!(*filmstrip.borrow(), vec![3, 7]);
}

/// A double-tap from rest targets 3.0; a second tap mid-flight starts a
/// new session from the interpolated scale targeting 1.0, with a single
/// transform applied per frame throughout.
#[test]
fn double_tap_zoom_retargets_mid_flight() {
    let options = ViewerOptions::new(sequence(&["a"]));
    let (mut viewer, _rx) = open(options);

    let frames = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&frames);
    let _sub = viewer.subscribe_transform(move |t| sink.borrow_mut().push(t.scale));
    frames.borrow_mut().clear(); // drop the identity replay

    let t0 = Instant::now();
    viewer.double_tap(Point::new(60.0, 90.0), t0).unwrap();

    // Halfway through: smoothstep(0.5) puts the scale at 2.0.
    assert!(viewer.tick(t0 + Duration::from_millis(100)).unwrap());
    let mid = *frames.borrow().last().expect("one frame applied");
    assert!((mid - 2.0).abs() < 1e-4);

    // Second tap before completion: retarget to rest from the current value.
    viewer
        .double_tap(Point::new(60.0, 90.0), t0 + Duration::from_millis(100))
        .unwrap();
    assert!(!viewer
        .tick(t0 + Duration::from_millis(100) + ZOOM_DURATION)
        .unwrap());

    let frames = frames.borrow();
    assert_eq!(frames.len(), 2); // exactly one transform per tick
    assert!((frames[1] - 1.0).abs() < 1e-4);
}

/// Dismissing returns no selection and rejects further input.
#[test]
fn dismissal_cancels_the_session() {
    let options = ViewerOptions::new(sequence(&["a", "b"]))
        .with_selection(vec![id("a")], SelectionLimit::new(2));
    let (mut viewer, mut rx) = open(options);

    viewer.dismiss().expect("viewing");

    assert_eq!(rx.try_recv().expect("resolved"), SessionOutcome::Cancelled);
    assert_eq!(viewer.navigate_to(1).unwrap_err(), Error::SessionClosed);
}

/// The caller-side future resolves with the confirmed selection when
/// awaited asynchronously.
#[tokio::test]
async fn outcome_future_resolves_on_confirm() {
    let options = ViewerOptions::new(sequence(&["a", "b", "c"]))
        .with_selection(Vec::new(), SelectionLimit::new(2));
    let (mut viewer, rx) = open(options);

    viewer.toggle_selection(&id("c")).unwrap();
    viewer.toggle_selection(&id("a")).unwrap();
    viewer.confirm().expect("non-empty selection");

    assert_eq!(
        rx.await.expect("sender resolved before drop"),
        SessionOutcome::Confirmed(vec![id("c"), id("a")])
    );
}

/// An initial selection from the caller is honored and extended.
#[test]
fn initial_selection_carries_into_the_session() {
    let options = ViewerOptions::new(sequence(&["a", "b", "c"]))
        .with_selection(vec![id("b")], SelectionLimit::new(2));
    let (mut viewer, _rx) = open(options);

    assert!(viewer.is_selected(&id("b")));
    viewer.toggle_selection(&id("c")).unwrap();

    assert_eq!(
        viewer.confirm().expect("non-empty selection"),
        vec![id("b"), id("c")]
    );
}

/// Swipe gating during video playback: repeated disables are idempotent
/// and navigation by explicit index stays available.
#[test]
fn video_playback_gates_swiping_without_flicker() {
    let options = ViewerOptions::new(AssetSequence::new(vec![
        MediaItem::new(id("photo"), MediaKind::Image),
        MediaItem::new(id("clip"), MediaKind::Video),
    ])
    .expect("valid sequence"));
    let (mut viewer, _rx) = open(options);

    viewer.navigate_to(1).expect("in range");
    assert_eq!(viewer.current_item().kind(), MediaKind::Video);

    assert!(viewer.set_paging_enabled(false).unwrap());
    assert!(!viewer.set_paging_enabled(false).unwrap()); // playback loop repeats
    assert!(!viewer.paging_enabled());

    assert!(viewer.set_paging_enabled(true).unwrap());
    assert!(viewer.paging_enabled());
}
