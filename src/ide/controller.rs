//! # IDE Controller
//!
//! Owns every piece of state behind one IDE screen and the timers that
//! mutate it. Instances are fully independent: there is no process-wide
//! state, so two mounted controllers never observe each other.
//!
//! ## Lifecycle
//!
//! ```text
//! new() ──▶ mount(now) ──▶ handle_input / tick / ... ──▶ unmount()
//! ```
//!
//! `mount` resets the screen to its defaults and starts the ambient clocks.
//! `unmount` drops the in-flight transition, pending assistant replies and
//! ambient clocks. Every operation on an unmounted controller is a no-op, so
//! a timer that fires late can never touch a torn-down screen.
//!
//! ## Revisions
//!
//! [`IdeController::revision`] increases on every state mutation. The UI uses
//! it to know when something changed; tests use it to prove nothing did.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

use super::animation::{GlowPulse, LOGO_GLOW, THINKING_GLOW};
use super::assistant::MockAssistant;
use super::gesture::{GestureContext, GestureIntent, GestureOutcome, GestureWatcher, InputEvent};
use super::panel::{BottomTab, FileRef, PanelState};
use super::terminal::MockTerminal;
use super::transition::{TransitionKind, TransitionSequencer};
use super::Timings;

#[derive(Debug)]
pub struct IdeController {
    timings: Timings,
    mounted_at: Option<Instant>,
    last_activity: Option<Instant>,
    revision: u64,
    panels: PanelState,
    sequencer: TransitionSequencer,
    gestures: GestureWatcher,
    terminal: MockTerminal,
    assistant: MockAssistant,
    glow: GlowPulse,
    rng: StdRng,
}

impl IdeController {
    pub fn new(timings: Timings) -> Self {
        Self::with_rng(timings, StdRng::from_entropy())
    }

    /// Build with a fixed random source, for reproducible assistant replies.
    pub fn with_rng(timings: Timings, rng: StdRng) -> Self {
        Self {
            timings,
            mounted_at: None,
            last_activity: None,
            revision: 0,
            panels: PanelState::new(),
            sequencer: TransitionSequencer::new(&timings),
            gestures: GestureWatcher::new(&timings),
            terminal: MockTerminal::new(),
            assistant: MockAssistant::new(timings.reply_delay),
            glow: GlowPulse::new(timings.glow_period),
            rng,
        }
    }

    // -- Lifecycle ----------------------------------------------------------

    pub fn mount(&mut self, now: Instant) {
        if self.is_mounted() {
            return;
        }
        self.panels = PanelState::new();
        self.sequencer = TransitionSequencer::new(&self.timings);
        self.gestures = GestureWatcher::new(&self.timings);
        self.terminal = MockTerminal::new();
        self.assistant = MockAssistant::new(self.timings.reply_delay);
        self.glow.start(now);
        self.mounted_at = Some(now);
        self.last_activity = Some(now);
        self.revision += 1;
        tracing::info!("IDE screen mounted");
    }

    pub fn unmount(&mut self) {
        if !self.is_mounted() {
            return;
        }
        self.sequencer.discard();
        self.assistant.cancel();
        self.gestures.reset();
        self.glow.stop();
        self.mounted_at = None;
        self.last_activity = None;
        tracing::info!("IDE screen unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted_at.is_some()
    }

    pub fn mounted_at(&self) -> Option<Instant> {
        self.mounted_at
    }

    // -- Read access ----------------------------------------------------------

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn panels(&self) -> &PanelState {
        &self.panels
    }

    pub fn terminal(&self) -> &MockTerminal {
        &self.terminal
    }

    pub fn assistant(&self) -> &MockAssistant {
        &self.assistant
    }

    pub fn glow(&self) -> &GlowPulse {
        &self.glow
    }

    /// Logo glow in `0.0..=1.0`: the breathing pulse, brighter while the
    /// assistant is thinking.
    pub fn logo_glow(&self) -> f32 {
        let peak = if self.assistant.is_typing() {
            THINKING_GLOW
        } else {
            LOGO_GLOW
        };
        self.glow.intensity() * peak
    }

    pub fn is_transitioning(&self) -> bool {
        self.sequencer.is_playing()
    }

    pub fn transition_progress(&self, now: Instant) -> Option<(TransitionKind, f32)> {
        self.sequencer.progress(now)
    }

    pub fn ripple_progress(&self, now: Instant) -> Option<f32> {
        self.sequencer.ripple_progress(now)
    }

    /// Whether ambient animation is still running (input seen recently).
    pub fn ambient_active(&self, now: Instant) -> bool {
        self.last_activity
            .is_some_and(|at| now.saturating_duration_since(at) < self.timings.idle_timeout)
    }

    /// Whether the screen needs frequent redraws right now.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.is_mounted()
            && (self.sequencer.is_playing()
                || self.sequencer.ripple_active(now)
                || self.assistant.is_typing()
                || self.ambient_active(now))
    }

    // -- Input ------------------------------------------------------------------

    /// Record user activity; wakes the ambient animation.
    pub fn note_activity(&mut self, now: Instant) {
        if self.is_mounted() {
            self.last_activity = Some(now);
        }
    }

    /// Feed one input event through the gesture watcher and act on its intent.
    pub fn handle_input(&mut self, event: &InputEvent, now: Instant) -> GestureOutcome {
        if !self.is_mounted() {
            return GestureOutcome::default();
        }
        self.note_activity(now);

        let context = GestureContext {
            terminal_visible: self.panels.terminal_visible,
            transition_in_flight: self.sequencer.is_playing(),
        };
        let outcome = self.gestures.observe(event, context, now);
        match outcome.intent {
            Some(GestureIntent::OpenTerminal) => {
                self.open_terminal_with_animation(now);
            }
            Some(GestureIntent::CloseTerminal) => {
                self.close_terminal();
            }
            None => {}
        }
        outcome
    }

    // -- Operations -------------------------------------------------------------

    /// Start the open-terminal transition. No-op if the terminal is already
    /// visible or another transition is playing.
    pub fn open_terminal_with_animation(&mut self, now: Instant) -> bool {
        if !self.is_mounted() || self.panels.terminal_visible {
            return false;
        }
        self.start_transition(TransitionKind::OpenTerminal, now)
    }

    /// Start the open-folder transition. No-op once the folder is open.
    pub fn open_folder_with_animation(&mut self, now: Instant) -> bool {
        if !self.is_mounted() || self.panels.folder_opened {
            return false;
        }
        self.start_transition(TransitionKind::OpenFolder, now)
    }

    fn start_transition(&mut self, kind: TransitionKind, now: Instant) -> bool {
        let started = self.sequencer.request(kind, now);
        if started {
            self.revision += 1;
        }
        started
    }

    pub fn close_terminal(&mut self) -> bool {
        self.mutate(|c| c.panels.hide_terminal())
    }

    pub fn select_file(&mut self, file: FileRef) -> bool {
        tracing::debug!(file = %file.name, "file selected");
        self.mutate(|c| c.panels.select_file(file))
    }

    pub fn set_bottom_tab(&mut self, tab: BottomTab) -> bool {
        self.mutate(|c| c.panels.set_bottom_tab(tab))
    }

    pub fn toggle_terminal(&mut self) -> bool {
        self.mutate(|c| c.panels.toggle_terminal())
    }

    pub fn toggle_assistant(&mut self) -> bool {
        self.mutate(|c| c.panels.toggle_assistant())
    }

    pub fn terminal_push_char(&mut self, ch: char) -> bool {
        self.mutate(|c| {
            c.terminal.push_char(ch);
            true
        })
    }

    pub fn terminal_pop_char(&mut self) -> bool {
        self.mutate(|c| {
            c.terminal.pop_char();
            true
        })
    }

    /// Run the terminal's input line. `wall_clock` answers `date`.
    pub fn submit_terminal(&mut self, wall_clock: DateTime<Utc>) -> bool {
        self.mutate(|c| {
            let had_input = !c.terminal.input().is_empty();
            c.terminal.submit(wall_clock) || had_input
        })
    }

    pub fn assistant_push_char(&mut self, ch: char) -> bool {
        self.mutate(|c| {
            c.assistant.push_char(ch);
            true
        })
    }

    pub fn assistant_pop_char(&mut self) -> bool {
        self.mutate(|c| {
            c.assistant.pop_char();
            true
        })
    }

    /// Send the assistant's input line. A blank line is cleared, not sent.
    pub fn send_to_assistant(&mut self, now: Instant) -> bool {
        self.mutate(|c| {
            let had_input = !c.assistant.input().is_empty();
            c.assistant.submit(now) || had_input
        })
    }

    /// Run `f` only while mounted, bumping the revision if it reports a change.
    fn mutate(&mut self, f: impl FnOnce(&mut Self) -> bool) -> bool {
        if !self.is_mounted() {
            return false;
        }
        let changed = f(self);
        if changed {
            self.revision += 1;
        }
        changed
    }

    // -- Timers -------------------------------------------------------------------

    /// Fire every timer that is due. Returns `true` if any state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_mounted() {
            return false;
        }

        let mut changed = false;
        if let Some(kind) = self.sequencer.poll(now) {
            match kind {
                TransitionKind::OpenTerminal => self.panels.show_terminal(),
                TransitionKind::OpenFolder => self.panels.open_folder(),
            };
            tracing::info!(?kind, "transition applied");
            changed = true;
        }
        if self.assistant.poll(now, &mut self.rng) {
            changed = true;
        }
        if self.ambient_active(now) && self.glow.update(now) {
            changed = true;
        }

        if changed {
            self.revision += 1;
        }
        changed
    }
}
