//! # IDE Interaction Core
//!
//! Framework-independent state machines behind the simulated IDE screen.
//! Nothing in here knows about ratatui or crossterm: the [`ui`](crate::ui)
//! layer translates host events into [`InputEvent`]s and paints whatever
//! [`IdeController`] exposes.
//!
//! ## Components
//!
//! - [`gesture`] - turns chords, ctrl+wheel bursts and pinches into intents
//! - [`transition`] - the `Idle -> Playing -> Idle` sequencer
//! - [`panel`] - which panels are visible, which tab and file are active
//! - [`terminal`] - the canned shell interpreter
//! - [`assistant`] - scripted AI chat replies
//! - [`content`] / [`highlight`] - static snippets and the token colorizer
//! - [`animation`] - ambient glow and wave timing
//! - [`controller`] - composes all of the above with a mount lifecycle
//!
//! ## Control flow
//!
//! ```text
//! InputEvent ──▶ GestureWatcher ──intent──▶ TransitionSequencer
//!                                                  │ (after `transition`)
//!                                                  ▼
//!                 render ◀── PanelState ◀── completion handler
//! ```
//!
//! Every time-dependent call takes `now: Instant`, so tests drive the clock.

pub mod animation;
pub mod assistant;
pub mod content;
pub mod controller;
pub mod gesture;
pub mod highlight;
pub mod panel;
pub mod terminal;
pub mod transition;

pub use controller::IdeController;
pub use gesture::{GestureIntent, InputEvent};
pub use panel::{BottomTab, FileRef, Language, PanelState};
pub use transition::TransitionKind;

use std::time::Duration;

/// Every timing constant the controller uses.
///
/// Built from [`AnimationConfig`](crate::ui::config::AnimationConfig) at
/// runtime; [`Timings::default`] carries the stock values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timings {
    /// How long the open-terminal / open-folder animation plays.
    pub transition: Duration,
    /// How long the ripple overlay flashes after the terminal opens.
    pub ripple: Duration,
    /// Quiet gap that ends a ctrl+wheel burst.
    pub wheel_debounce: Duration,
    /// Window in which a repeated chord is treated as key auto-repeat.
    pub chord_debounce: Duration,
    /// Minimum shrink, in pixels, between two pinch samples.
    pub pinch_threshold: f32,
    /// Delay before the assistant answers.
    pub reply_delay: Duration,
    /// Full breathing cycle of the glow pulse.
    pub glow_period: Duration,
    /// Ambient animation settles after this long without input.
    pub idle_timeout: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            transition: Duration::from_millis(450),
            ripple: Duration::from_millis(300),
            wheel_debounce: Duration::from_millis(300),
            chord_debounce: Duration::from_millis(300),
            pinch_threshold: 50.0,
            reply_delay: Duration::from_millis(1000),
            glow_period: Duration::from_millis(2400),
            idle_timeout: Duration::from_secs(10),
        }
    }
}
