// SPDX-License-Identifier: MPL-2.0
//! Double-tap zoom gesture controller.
//!
//! A double-tap toggles between the rest scale and the zoomed-in scale
//! through a bounded, eased interpolation. The animation is a resumable
//! state value: a double-tap arriving mid-flight supersedes the session in
//! place and starts from the *current* interpolated scale, so retargeting
//! is a pure state transition with no cancel-and-restart race and at most
//! one active tick path at any instant. The frame clock drives the
//! controller by calling [`ZoomGestureController::tick`].

use crate::domain::ui::{Point, Transform};
use crate::notify::{Observable, Subscription};
use std::time::{Duration, Instant};

/// Total scale when no zoom is applied.
pub const REST_SCALE: f32 = 1.0;

/// Total scale a double-tap from rest zooms to.
pub const ZOOMED_SCALE: f32 = 3.0;

/// Duration of the zoom interpolation.
pub const ZOOM_DURATION: Duration = Duration::from_millis(200);

/// Tolerance for treating a scale as the rest scale.
const REST_EPSILON: f32 = 1e-3;

/// Smoothstep easing over `[0, 1]`.
fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// One in-flight interpolation, alive only between a double-tap and the
/// tick that reaches progress 1.0.
#[derive(Debug, Clone, Copy)]
struct ZoomSession {
    start_scale: f32,
    target_scale: f32,
    anchor: Point,
    started_at: Instant,
}

/// Converts double-taps into a stream of scale transforms for the image
/// surface.
#[derive(Debug)]
pub struct ZoomGestureController {
    /// Last scale applied to the surface (interpolated while animating).
    scale: f32,
    session: Option<ZoomSession>,
    transforms: Observable<Transform>,
}

impl ZoomGestureController {
    /// Creates a controller at rest scale.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scale: REST_SCALE,
            session: None,
            transforms: Observable::new(Transform::identity()),
        }
    }

    /// Handles a double-tap at `at`.
    ///
    /// From rest scale the target is [`ZOOMED_SCALE`]; from anywhere else
    /// the target is [`REST_SCALE`] (binary toggle, not continuous). A tap
    /// during an in-flight animation replaces the session, starting from
    /// the current interpolated scale for visual continuity.
    pub fn double_tap(&mut self, at: Point, now: Instant) {
        let start = self.scale;
        let target = if (start - REST_SCALE).abs() <= REST_EPSILON {
            ZOOMED_SCALE
        } else {
            REST_SCALE
        };
        tracing::trace!(start, target, "zoom session started");
        // Replacing the session is the detach: the superseded interpolation
        // can never tick again.
        self.session = Some(ZoomSession {
            start_scale: start,
            target_scale: target,
            anchor: at,
            started_at: now,
        });
    }

    /// Advances the in-flight interpolation to `now`.
    ///
    /// Emits one [`Transform`] per call while a session is live and ends
    /// the session once progress reaches 1.0. Returns whether the
    /// animation is still in flight; with no session it emits nothing.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(session) = self.session else {
            return false;
        };

        let elapsed = now.saturating_duration_since(session.started_at);
        let progress = (elapsed.as_secs_f32() / ZOOM_DURATION.as_secs_f32()).clamp(0.0, 1.0);
        let eased = smoothstep(progress);
        let scale = session.start_scale + (session.target_scale - session.start_scale) * eased;

        self.scale = scale;
        self.transforms.set(Transform {
            scale,
            anchor: session.anchor,
        });

        if progress >= 1.0 {
            self.session = None;
            false
        } else {
            true
        }
    }

    /// Whether an interpolation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.session.is_some()
    }

    /// The last scale applied to the surface.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Subscribes the image surface to transform updates. The last
    /// transform is replayed immediately.
    pub fn subscribe(
        &self,
        listener: impl FnMut(&Transform) + 'static,
    ) -> Subscription<Transform> {
        self.transforms.subscribe(listener)
    }

    /// Drops any in-flight session and detaches all subscribers. Called at
    /// terminal session transitions so no tick can fire afterwards.
    pub fn cancel(&mut self) {
        self.session = None;
        self.transforms.close();
    }
}

impl Default for ZoomGestureController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const HALF: Duration = Duration::from_millis(100);

    fn tap_point() -> Point {
        Point::new(40.0, 80.0)
    }

    #[test]
    fn double_tap_at_rest_targets_zoomed_scale() {
        let mut zoom = ZoomGestureController::new();
        let t0 = Instant::now();

        zoom.double_tap(tap_point(), t0);
        assert!(zoom.is_animating());

        let still_running = zoom.tick(t0 + ZOOM_DURATION);
        assert!(!still_running);
        assert!(!zoom.is_animating());
        assert!((zoom.scale() - ZOOMED_SCALE).abs() < 1e-4);
    }

    #[test]
    fn double_tap_away_from_rest_targets_rest_scale() {
        let mut zoom = ZoomGestureController::new();
        let t0 = Instant::now();

        zoom.double_tap(tap_point(), t0);
        zoom.tick(t0 + ZOOM_DURATION);
        assert!((zoom.scale() - ZOOMED_SCALE).abs() < 1e-4);

        zoom.double_tap(tap_point(), t0 + ZOOM_DURATION);
        zoom.tick(t0 + ZOOM_DURATION * 2);
        assert!((zoom.scale() - REST_SCALE).abs() < 1e-4);
    }

    #[test]
    fn mid_flight_progress_is_eased() {
        let mut zoom = ZoomGestureController::new();
        let t0 = Instant::now();

        zoom.double_tap(tap_point(), t0);
        let still_running = zoom.tick(t0 + HALF);

        assert!(still_running);
        // smoothstep(0.5) == 0.5, halfway between 1.0 and 3.0
        assert!((zoom.scale() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn retarget_mid_flight_starts_from_interpolated_scale() {
        let mut zoom = ZoomGestureController::new();
        let t0 = Instant::now();

        zoom.double_tap(tap_point(), t0);
        zoom.tick(t0 + HALF);
        let mid_scale = zoom.scale();
        assert!(mid_scale > REST_SCALE && mid_scale < ZOOMED_SCALE);

        // Second tap before completion: new session from the current value,
        // targeting rest.
        zoom.double_tap(Point::new(10.0, 10.0), t0 + HALF);
        zoom.tick(t0 + HALF + ZOOM_DURATION);

        assert!((zoom.scale() - REST_SCALE).abs() < 1e-4);
        assert!(!zoom.is_animating());
    }

    #[test]
    fn retarget_produces_one_transform_per_tick() {
        let mut zoom = ZoomGestureController::new();
        let emissions = Rc::new(RefCell::new(0usize));

        let sink = Rc::clone(&emissions);
        let _sub = zoom.subscribe(move |_| *sink.borrow_mut() += 1);
        *emissions.borrow_mut() = 0; // discard the replay

        let t0 = Instant::now();
        zoom.double_tap(tap_point(), t0);
        zoom.tick(t0 + Duration::from_millis(50));
        zoom.double_tap(tap_point(), t0 + Duration::from_millis(50));
        zoom.tick(t0 + Duration::from_millis(66));

        // One active session at any instant: each tick applies exactly once.
        assert_eq!(*emissions.borrow(), 2);
    }

    #[test]
    fn no_ticks_fire_after_completion() {
        let mut zoom = ZoomGestureController::new();
        let emissions = Rc::new(RefCell::new(0usize));

        let sink = Rc::clone(&emissions);
        let _sub = zoom.subscribe(move |_| *sink.borrow_mut() += 1);
        *emissions.borrow_mut() = 0;

        let t0 = Instant::now();
        zoom.double_tap(tap_point(), t0);
        zoom.tick(t0 + ZOOM_DURATION);
        assert_eq!(*emissions.borrow(), 1);

        // Frame clock keeps running; the ended session stays silent.
        assert!(!zoom.tick(t0 + ZOOM_DURATION * 2));
        assert_eq!(*emissions.borrow(), 1);
    }

    #[test]
    fn transforms_carry_the_tap_anchor() {
        let mut zoom = ZoomGestureController::new();
        let last = Rc::new(RefCell::new(Transform::identity()));

        let sink = Rc::clone(&last);
        let _sub = zoom.subscribe(move |t| *sink.borrow_mut() = *t);

        let t0 = Instant::now();
        zoom.double_tap(Point::new(33.0, 44.0), t0);
        zoom.tick(t0 + HALF);

        let transform = *last.borrow();
        assert!((transform.anchor.x - 33.0).abs() < f32::EPSILON);
        assert!((transform.anchor.y - 44.0).abs() < f32::EPSILON);
    }

    #[test]
    fn cancel_detaches_and_silences_ticks() {
        let mut zoom = ZoomGestureController::new();
        let emissions = Rc::new(RefCell::new(0usize));

        let sink = Rc::clone(&emissions);
        let _sub = zoom.subscribe(move |_| *sink.borrow_mut() += 1);
        *emissions.borrow_mut() = 0;

        let t0 = Instant::now();
        zoom.double_tap(tap_point(), t0);
        zoom.cancel();

        assert!(!zoom.is_animating());
        assert!(!zoom.tick(t0 + HALF));
        assert_eq!(*emissions.borrow(), 0);
    }

    #[test]
    fn smoothstep_endpoints_and_midpoint() {
        assert!(smoothstep(0.0).abs() < f32::EPSILON);
        assert!((smoothstep(1.0) - 1.0).abs() < f32::EPSILON);
        assert!((smoothstep(0.5) - 0.5).abs() < f32::EPSILON);
    }
}
