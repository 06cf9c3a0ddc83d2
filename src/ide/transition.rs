//! # Transition Sequencer
//!
//! Plays the fixed-length logo/ripple animation and hands back the pending
//! state change once it has run to completion.
//!
//! ```text
//!            request(kind)             poll() after `duration`
//!   Idle ─────────────────▶ Playing ─────────────────────────▶ Idle
//!     ▲                        │
//!     └──────── discard() ─────┘   (no completion is reported)
//! ```
//!
//! There is exactly one transition slot. A request while `Playing` is
//! rejected rather than queued, so two state flips can never overlap.

use std::time::{Duration, Instant};

use super::Timings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    OpenTerminal,
    OpenFolder,
}

/// One accepted request, consumed exactly once by [`TransitionSequencer::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRequest {
    pub kind: TransitionKind,
    pub started_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequencerState {
    #[default]
    Idle,
    Playing(TransitionRequest),
}

#[derive(Debug)]
pub struct TransitionSequencer {
    state: SequencerState,
    duration: Duration,
    ripple_duration: Duration,
    ripple_until: Option<Instant>,
}

impl TransitionSequencer {
    pub fn new(timings: &Timings) -> Self {
        Self {
            state: SequencerState::Idle,
            duration: timings.transition,
            ripple_duration: timings.ripple,
            ripple_until: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, SequencerState::Playing(_))
    }

    /// Start a transition. Returns `false` (and changes nothing) unless idle.
    pub fn request(&mut self, kind: TransitionKind, now: Instant) -> bool {
        if self.is_playing() {
            tracing::debug!(?kind, "transition already in flight, ignoring request");
            return false;
        }
        self.state = SequencerState::Playing(TransitionRequest {
            kind,
            started_at: now,
        });
        tracing::debug!(?kind, "transition started");
        true
    }

    /// Report the finished transition, once, when its duration has elapsed.
    ///
    /// An open-terminal completion also arms the ripple flash.
    pub fn poll(&mut self, now: Instant) -> Option<TransitionKind> {
        let SequencerState::Playing(request) = self.state else {
            return None;
        };
        if now.saturating_duration_since(request.started_at) < self.duration {
            return None;
        }

        self.state = SequencerState::Idle;
        if request.kind == TransitionKind::OpenTerminal {
            self.ripple_until = Some(now + self.ripple_duration);
        }
        tracing::debug!(kind = ?request.kind, "transition finished");
        Some(request.kind)
    }

    /// Fraction of the running animation in `0.0..=1.0`, or `None` when idle.
    pub fn progress(&self, now: Instant) -> Option<(TransitionKind, f32)> {
        let SequencerState::Playing(request) = self.state else {
            return None;
        };
        if self.duration.is_zero() {
            return Some((request.kind, 1.0));
        }
        let elapsed = now.saturating_duration_since(request.started_at);
        let fraction = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        Some((request.kind, fraction.min(1.0)))
    }

    pub fn ripple_active(&self, now: Instant) -> bool {
        self.ripple_until.is_some_and(|until| now < until)
    }

    /// Fraction of the ripple flash that has played, while it is visible.
    pub fn ripple_progress(&self, now: Instant) -> Option<f32> {
        let until = self.ripple_until.filter(|until| now < *until)?;
        if self.ripple_duration.is_zero() {
            return None;
        }
        let remaining = until.saturating_duration_since(now).as_secs_f32();
        Some(1.0 - remaining / self.ripple_duration.as_secs_f32())
    }

    /// Drop the in-flight transition and ripple without reporting completion.
    pub fn discard(&mut self) {
        if let SequencerState::Playing(request) = self.state {
            tracing::debug!(kind = ?request.kind, "transition discarded");
        }
        self.state = SequencerState::Idle;
        self.ripple_until = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequencer() -> TransitionSequencer {
        TransitionSequencer::new(&Timings::default())
    }

    #[test]
    fn test_idle_by_default() {
        let seq = sequencer();
        assert!(!seq.is_playing());
        assert!(seq.progress(Instant::now()).is_none());
    }

    #[test]
    fn test_completes_once_after_duration() {
        let mut seq = sequencer();
        let t0 = Instant::now();

        assert!(seq.request(TransitionKind::OpenTerminal, t0));
        assert!(seq.poll(t0 + Duration::from_millis(200)).is_none());

        let done = t0 + Duration::from_millis(450);
        assert_eq!(seq.poll(done), Some(TransitionKind::OpenTerminal));
        assert!(!seq.is_playing());
        assert!(seq.poll(done + Duration::from_secs(1)).is_none());
    }

    #[test]
    fn test_rejects_second_request_while_playing() {
        let mut seq = sequencer();
        let t0 = Instant::now();

        assert!(seq.request(TransitionKind::OpenTerminal, t0));
        assert!(!seq.request(TransitionKind::OpenFolder, t0 + Duration::from_millis(10)));
        assert!(!seq.request(TransitionKind::OpenTerminal, t0 + Duration::from_millis(20)));

        // The original request still owns the slot and timing
        assert_eq!(
            seq.poll(t0 + Duration::from_millis(450)),
            Some(TransitionKind::OpenTerminal)
        );
    }

    #[test]
    fn test_ripple_follows_open_terminal_only() {
        let mut seq = sequencer();
        let t0 = Instant::now();

        seq.request(TransitionKind::OpenFolder, t0);
        let done = t0 + Duration::from_millis(450);
        seq.poll(done);
        assert!(!seq.ripple_active(done));

        seq.request(TransitionKind::OpenTerminal, done);
        let done = done + Duration::from_millis(450);
        seq.poll(done);
        assert!(seq.ripple_active(done));
        assert!(seq.ripple_active(done + Duration::from_millis(299)));
        assert!(!seq.ripple_active(done + Duration::from_millis(300)));
    }

    #[test]
    fn test_progress_is_clamped() {
        let mut seq = sequencer();
        let t0 = Instant::now();
        seq.request(TransitionKind::OpenFolder, t0);

        let (_, half) = seq
            .progress(t0 + Duration::from_millis(225))
            .expect("playing");
        assert!((half - 0.5).abs() < 0.01);

        let (_, full) = seq.progress(t0 + Duration::from_secs(3)).expect("playing");
        assert!((full - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_discard_drops_completion() {
        let mut seq = sequencer();
        let t0 = Instant::now();
        seq.request(TransitionKind::OpenTerminal, t0);
        seq.discard();
        assert!(seq.poll(t0 + Duration::from_secs(1)).is_none());
        assert!(!seq.ripple_active(t0 + Duration::from_secs(1)));
    }
}
