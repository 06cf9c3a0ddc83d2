//! # Gesture Watcher
//!
//! Recognises the three equivalent "open terminal" gestures and the close
//! gesture, and collapses each physical gesture into at most one intent.
//!
//! | Gesture                         | Intent                          |
//! |---------------------------------|---------------------------------|
//! | ctrl+`                          | open if closed, close if open   |
//! | wheel with the modifier held    | open (once per wheel burst)     |
//! | two-finger pinch-close          | open (once per touch sequence)  |
//! | explicit close control          | close                           |
//!
//! The watcher only recognises. Whether a transition is allowed to start is
//! the sequencer's call; the watcher is told about it through
//! [`GestureContext`] so a pinch arriving mid-transition does not consume the
//! gesture.

use std::time::{Duration, Instant};

use super::Timings;

/// The key that, with ctrl held, toggles the terminal.
pub const TERMINAL_CHORD_KEY: char = '`';

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Raw input, already stripped of host-specific detail.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Chord { key: char, ctrl: bool },
    Wheel { delta: f32, modifier: bool },
    TouchStart(Vec<Point>),
    TouchMove(Vec<Point>),
    TouchEnd,
    CloseControl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureIntent {
    OpenTerminal,
    CloseTerminal,
}

/// What the watcher needs to know about the rest of the screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureContext {
    pub terminal_visible: bool,
    pub transition_in_flight: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureOutcome {
    pub intent: Option<GestureIntent>,
    /// The host should swallow its native behaviour (zoom, devtools).
    pub suppress_default: bool,
}

impl GestureOutcome {
    fn suppressed(intent: Option<GestureIntent>) -> Self {
        Self {
            intent,
            suppress_default: true,
        }
    }
}

#[derive(Debug, Default)]
struct PinchTracker {
    last_distance: Option<f32>,
    consumed: bool,
}

impl PinchTracker {
    fn reset(&mut self) {
        self.last_distance = None;
        self.consumed = false;
    }
}

#[derive(Debug)]
pub struct GestureWatcher {
    wheel_debounce: Duration,
    chord_debounce: Duration,
    pinch_threshold: f32,
    last_wheel: Option<Instant>,
    wheel_burst_fired: bool,
    last_chord: Option<Instant>,
    pinch: PinchTracker,
}

impl GestureWatcher {
    pub fn new(timings: &Timings) -> Self {
        Self {
            wheel_debounce: timings.wheel_debounce,
            chord_debounce: timings.chord_debounce,
            pinch_threshold: timings.pinch_threshold,
            last_wheel: None,
            wheel_burst_fired: false,
            last_chord: None,
            pinch: PinchTracker::default(),
        }
    }

    /// Forget any half-observed gesture.
    pub fn reset(&mut self) {
        self.last_wheel = None;
        self.wheel_burst_fired = false;
        self.last_chord = None;
        self.pinch.reset();
    }

    pub fn observe(
        &mut self,
        event: &InputEvent,
        context: GestureContext,
        now: Instant,
    ) -> GestureOutcome {
        match event {
            InputEvent::Chord { key, ctrl } => self.observe_chord(*key, *ctrl, context, now),
            InputEvent::Wheel { modifier, .. } => self.observe_wheel(*modifier, context, now),
            InputEvent::TouchStart(contacts) => {
                self.pinch.reset();
                if let [a, b, ..] = contacts.as_slice() {
                    self.pinch.last_distance = Some(a.distance(*b));
                }
                GestureOutcome::default()
            }
            InputEvent::TouchMove(contacts) => self.observe_pinch(contacts, context),
            InputEvent::TouchEnd => {
                self.pinch.reset();
                GestureOutcome::default()
            }
            InputEvent::CloseControl => GestureOutcome {
                intent: context
                    .terminal_visible
                    .then_some(GestureIntent::CloseTerminal),
                suppress_default: false,
            },
        }
    }

    fn observe_chord(
        &mut self,
        key: char,
        ctrl: bool,
        context: GestureContext,
        now: Instant,
    ) -> GestureOutcome {
        if !ctrl || key != TERMINAL_CHORD_KEY {
            return GestureOutcome::default();
        }

        // Auto-repeat keeps refreshing the timestamp, so a held chord fires once
        let repeated = self
            .last_chord
            .is_some_and(|at| now.saturating_duration_since(at) < self.chord_debounce);
        self.last_chord = Some(now);
        if repeated {
            return GestureOutcome::suppressed(None);
        }

        let intent = if context.terminal_visible {
            GestureIntent::CloseTerminal
        } else {
            GestureIntent::OpenTerminal
        };
        tracing::debug!(?intent, "terminal chord");
        GestureOutcome::suppressed(Some(intent))
    }

    fn observe_wheel(
        &mut self,
        modifier: bool,
        context: GestureContext,
        now: Instant,
    ) -> GestureOutcome {
        if !modifier {
            self.last_wheel = None;
            self.wheel_burst_fired = false;
            return GestureOutcome::default();
        }

        let in_burst = self
            .last_wheel
            .is_some_and(|at| now.saturating_duration_since(at) < self.wheel_debounce);
        self.last_wheel = Some(now);
        if !in_burst {
            self.wheel_burst_fired = false;
        }
        if self.wheel_burst_fired {
            return GestureOutcome::suppressed(None);
        }

        self.wheel_burst_fired = true;
        if context.terminal_visible || context.transition_in_flight {
            return GestureOutcome::suppressed(None);
        }
        tracing::debug!("modifier wheel burst");
        GestureOutcome::suppressed(Some(GestureIntent::OpenTerminal))
    }

    fn observe_pinch(&mut self, contacts: &[Point], context: GestureContext) -> GestureOutcome {
        let [a, b, ..] = contacts else {
            self.pinch.reset();
            return GestureOutcome::default();
        };
        if self.pinch.consumed {
            return GestureOutcome::default();
        }

        let current = a.distance(*b);
        if let Some(last) = self.pinch.last_distance {
            let delta = last - current;
            if delta > self.pinch_threshold
                && !context.transition_in_flight
                && !context.terminal_visible
            {
                self.pinch.last_distance = None;
                self.pinch.consumed = true;
                tracing::debug!(delta, "pinch close");
                return GestureOutcome {
                    intent: Some(GestureIntent::OpenTerminal),
                    suppress_default: false,
                };
            }
        }
        self.pinch.last_distance = Some(current);
        GestureOutcome::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn watcher() -> GestureWatcher {
        GestureWatcher::new(&Timings::default())
    }

    fn closed() -> GestureContext {
        GestureContext::default()
    }

    fn chord() -> InputEvent {
        InputEvent::Chord {
            key: TERMINAL_CHORD_KEY,
            ctrl: true,
        }
    }

    fn pair(spread: f32) -> Vec<Point> {
        vec![Point::new(100.0, 100.0), Point::new(100.0 + spread, 100.0)]
    }

    #[test]
    fn test_chord_opens_then_closes() {
        let mut w = watcher();
        let t0 = Instant::now();

        let out = w.observe(&chord(), closed(), t0);
        assert_eq!(out.intent, Some(GestureIntent::OpenTerminal));
        assert!(out.suppress_default);

        let open = GestureContext {
            terminal_visible: true,
            ..closed()
        };
        let out = w.observe(&chord(), open, t0 + Duration::from_secs(1));
        assert_eq!(out.intent, Some(GestureIntent::CloseTerminal));
    }

    #[test]
    fn test_chord_without_ctrl_is_ignored() {
        let mut w = watcher();
        let out = w.observe(
            &InputEvent::Chord {
                key: TERMINAL_CHORD_KEY,
                ctrl: false,
            },
            closed(),
            Instant::now(),
        );
        assert_eq!(out, GestureOutcome::default());
    }

    #[test]
    fn test_held_chord_fires_once() {
        let mut w = watcher();
        let t0 = Instant::now();

        assert!(w.observe(&chord(), closed(), t0).intent.is_some());
        // Auto-repeat every 50ms for a full second
        for i in 1..=20 {
            let out = w.observe(&chord(), closed(), t0 + Duration::from_millis(50 * i));
            assert!(out.intent.is_none());
            assert!(out.suppress_default);
        }
    }

    #[test]
    fn test_wheel_burst_fires_once() {
        let mut w = watcher();
        let t0 = Instant::now();
        let wheel = InputEvent::Wheel {
            delta: -1.0,
            modifier: true,
        };

        let mut fired = 0;
        for i in 0..10u64 {
            let out = w.observe(&wheel, closed(), t0 + Duration::from_millis(40 * i));
            if out.intent.is_some() {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);

        // A fresh burst after a quiet gap fires again
        let later = t0 + Duration::from_secs(5);
        assert_eq!(
            w.observe(&wheel, closed(), later).intent,
            Some(GestureIntent::OpenTerminal)
        );
    }

    #[test]
    fn test_plain_wheel_is_passed_through() {
        let mut w = watcher();
        let out = w.observe(
            &InputEvent::Wheel {
                delta: 1.0,
                modifier: false,
            },
            closed(),
            Instant::now(),
        );
        assert!(out.intent.is_none());
        assert!(!out.suppress_default);
    }

    #[test]
    fn test_wheel_while_open_is_noop() {
        let mut w = watcher();
        let open = GestureContext {
            terminal_visible: true,
            ..closed()
        };
        let out = w.observe(
            &InputEvent::Wheel {
                delta: 1.0,
                modifier: true,
            },
            open,
            Instant::now(),
        );
        assert!(out.intent.is_none());
        assert!(out.suppress_default);
    }

    #[test]
    fn test_pinch_close_fires_once_per_gesture() {
        let mut w = watcher();
        let now = Instant::now();

        w.observe(&InputEvent::TouchStart(pair(300.0)), closed(), now);
        // Shrinks by 20px: below threshold
        assert!(w
            .observe(&InputEvent::TouchMove(pair(280.0)), closed(), now)
            .intent
            .is_none());
        // Shrinks by 80px
        assert_eq!(
            w.observe(&InputEvent::TouchMove(pair(200.0)), closed(), now)
                .intent,
            Some(GestureIntent::OpenTerminal)
        );
        // Same fingers keep pinching: consumed
        assert!(w
            .observe(&InputEvent::TouchMove(pair(100.0)), closed(), now)
            .intent
            .is_none());
        assert!(w
            .observe(&InputEvent::TouchMove(pair(10.0)), closed(), now)
            .intent
            .is_none());

        // Lift and pinch again
        w.observe(&InputEvent::TouchEnd, closed(), now);
        w.observe(&InputEvent::TouchStart(pair(300.0)), closed(), now);
        assert!(w
            .observe(&InputEvent::TouchMove(pair(200.0)), closed(), now)
            .intent
            .is_some());
    }

    #[test]
    fn test_pinch_spread_does_not_fire() {
        let mut w = watcher();
        let now = Instant::now();
        w.observe(&InputEvent::TouchStart(pair(100.0)), closed(), now);
        assert!(w
            .observe(&InputEvent::TouchMove(pair(400.0)), closed(), now)
            .intent
            .is_none());
    }

    #[test]
    fn test_pinch_during_transition_is_not_consumed() {
        let mut w = watcher();
        let now = Instant::now();
        let busy = GestureContext {
            transition_in_flight: true,
            ..closed()
        };

        w.observe(&InputEvent::TouchStart(pair(300.0)), busy, now);
        assert!(w
            .observe(&InputEvent::TouchMove(pair(200.0)), busy, now)
            .intent
            .is_none());
        // Transition finished; keep pinching
        assert!(w
            .observe(&InputEvent::TouchMove(pair(100.0)), closed(), now)
            .intent
            .is_some());
    }

    #[test]
    fn test_single_contact_resets_pinch() {
        let mut w = watcher();
        let now = Instant::now();
        w.observe(&InputEvent::TouchStart(pair(300.0)), closed(), now);
        w.observe(
            &InputEvent::TouchMove(vec![Point::new(0.0, 0.0)]),
            closed(),
            now,
        );
        // First two-contact sample after the reset only seeds the distance
        assert!(w
            .observe(&InputEvent::TouchMove(pair(100.0)), closed(), now)
            .intent
            .is_none());
    }

    #[test]
    fn test_close_control() {
        let mut w = watcher();
        let now = Instant::now();
        assert!(w
            .observe(&InputEvent::CloseControl, closed(), now)
            .intent
            .is_none());
        let open = GestureContext {
            terminal_visible: true,
            ..closed()
        };
        assert_eq!(
            w.observe(&InputEvent::CloseControl, open, now).intent,
            Some(GestureIntent::CloseTerminal)
        );
    }

    #[test]
    fn test_point_distance() {
        let d = Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < f32::EPSILON);
    }
}
