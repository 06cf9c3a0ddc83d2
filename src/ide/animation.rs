//! Ambient animation clocks: the breathing glow around the logo, the
//! travelling "electrical wave" lanes behind the explorer, and the rain of
//! file-extension tags that reveals the landing page.
//!
//! The glow is owned by a controller instance and only advances while it is
//! mounted and active. The tag rain belongs to the landing page and is
//! rebuilt every time the page is entered.

use rand::Rng;
use std::f32::consts::TAU;
use std::ops::Range;
use std::time::{Duration, Instant};

/// Discrete glow steps; the renderer only redraws when the step changes.
pub const GLOW_LEVELS: u8 = 8;

/// Peak strength of the logo glow at rest.
pub const LOGO_GLOW: f32 = 0.6;
/// Peak strength while the assistant is composing a reply.
pub const THINKING_GLOW: f32 = 1.0;

#[derive(Debug, Clone)]
pub struct GlowPulse {
    period: Duration,
    started_at: Option<Instant>,
    level: u8,
}

impl GlowPulse {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            started_at: None,
            level: 0,
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.level = 0;
    }

    pub fn stop(&mut self) {
        self.started_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Current step in `0..=GLOW_LEVELS`.
    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn intensity(&self) -> f32 {
        f32::from(self.level) / f32::from(GLOW_LEVELS)
    }

    /// Advance to `now`. Returns `true` when the visible level changed.
    pub fn update(&mut self, now: Instant) -> bool {
        let Some(started_at) = self.started_at else {
            return false;
        };
        if self.period.is_zero() {
            return false;
        }

        let elapsed = now.saturating_duration_since(started_at).as_secs_f32();
        let phase = (elapsed / self.period.as_secs_f32()).fract();
        let intensity = 0.5 - 0.5 * (phase * TAU).cos();
        let level = (intensity * f32::from(GLOW_LEVELS)).round() as u8;

        let changed = level != self.level;
        self.level = level;
        changed
    }
}

/// One lane of the explorer's wave: a bright band sweeping down and back up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveLane {
    pub period: Duration,
    pub delay: Duration,
    /// Horizontal position as a fraction of the panel width.
    pub column: f32,
}

pub const EXPLORER_WAVES: [WaveLane; 2] = [
    WaveLane {
        period: Duration::from_secs(3),
        delay: Duration::ZERO,
        column: 0.2,
    },
    WaveLane {
        period: Duration::from_secs(4),
        delay: Duration::from_secs(1),
        column: 0.8,
    },
];

impl WaveLane {
    /// Vertical position of the band in `0.0..=1.0` (top to bottom), eased
    /// in and out, or `None` before the lane's delay has passed.
    pub fn position(&self, elapsed: Duration) -> Option<f32> {
        let running = elapsed.checked_sub(self.delay)?;
        if self.period.is_zero() {
            return Some(0.0);
        }
        let phase = (running.as_secs_f32() / self.period.as_secs_f32()).fract();
        let sweep = if phase < 0.5 {
            phase * 2.0
        } else {
            2.0 - phase * 2.0
        };
        Some(sweep * sweep * (3.0 - 2.0 * sweep))
    }
}

/// Extensions that rain onto the landing page, in drop order around the
/// stage.
pub const FILE_EXTENSIONS: [&str; 24] = [
    ".py", ".js", ".ipynb", ".ts", ".tsx", ".jsx", ".java", ".c", ".cpp", ".go", ".rs", ".php",
    ".rb", ".html", ".css", ".json", ".csv", ".sql", ".env", ".yml", ".bash", ".sh", ".md",
    ".txt",
];

/// Downward acceleration, in stage units per second squared.
pub const TAG_GRAVITY: f32 = 4.9;
/// Where a sinking tag comes to rest: embedded in the ground line.
pub const GROUND_LEVEL: f32 = -2.5;
/// Where a standing tag comes to rest: on top of the ground line.
pub const STANDING_LEVEL: f32 = -2.0;
/// Tags start somewhere in this band above the ground.
pub const DROP_HEIGHTS: Range<f32> = 8.0..20.0;
/// Spin while falling and after settling, in radians per second.
pub const FALL_SPIN: f32 = 1.2;
pub const IDLE_SPIN: f32 = 0.1;

/// One falling tag. Heights are in stage units; the ground line is at
/// [`GROUND_LEVEL`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallingTag {
    pub extension: &'static str,
    /// Horizontal position as a fraction of the stage width.
    pub column: f32,
    /// Distance toward the viewer in `-1.0..=1.0`; back tags draw higher.
    pub depth: f32,
    pub drop_height: f32,
    /// Every third tag stays standing on the ground instead of sinking in.
    pub stays: bool,
}

impl FallingTag {
    pub fn rest_height(&self) -> f32 {
        if self.stays {
            STANDING_LEVEL
        } else {
            GROUND_LEVEL
        }
    }

    /// Time from release until the tag lands.
    pub fn settle_after(&self) -> Duration {
        let fall = (self.drop_height - self.rest_height()).max(0.0);
        Duration::from_secs_f32((2.0 * fall / TAG_GRAVITY).sqrt())
    }

    pub fn is_settled(&self, elapsed: Duration) -> bool {
        elapsed >= self.settle_after()
    }

    pub fn height(&self, elapsed: Duration) -> f32 {
        let t = elapsed.as_secs_f32();
        (self.drop_height - 0.5 * TAG_GRAVITY * t * t).max(self.rest_height())
    }

    /// Accumulated rotation: fast while falling, a slow idle turn after.
    pub fn spin(&self, elapsed: Duration) -> f32 {
        let settle = self.settle_after();
        match elapsed.checked_sub(settle) {
            None => FALL_SPIN * elapsed.as_secs_f32(),
            Some(idle) => FALL_SPIN * settle.as_secs_f32() + IDLE_SPIN * idle.as_secs_f32(),
        }
    }
}

/// The landing page's reveal: every extension dropped from a staggered
/// height, laid out on a ring around the stage centre.
#[derive(Debug, Clone)]
pub struct TagRain {
    started_at: Instant,
    tags: Vec<FallingTag>,
}

impl TagRain {
    pub fn new<R: Rng>(started_at: Instant, rng: &mut R) -> Self {
        let count = FILE_EXTENSIONS.len() as f32;
        let tags = FILE_EXTENSIONS
            .iter()
            .enumerate()
            .map(|(i, &extension)| {
                let angle = i as f32 / count * TAU;
                let radius = rng.gen_range(0.6..1.0);
                FallingTag {
                    extension,
                    column: 0.5 + 0.45 * radius * angle.cos(),
                    depth: radius * angle.sin(),
                    drop_height: rng.gen_range(DROP_HEIGHTS),
                    stays: i % 3 == 0,
                }
            })
            .collect();
        Self { started_at, tags }
    }

    pub fn tags(&self) -> &[FallingTag] {
        &self.tags
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    /// When the last tag lands, measured from the start.
    pub fn settle_after(&self) -> Duration {
        self.tags
            .iter()
            .map(FallingTag::settle_after)
            .max()
            .unwrap_or_default()
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        self.elapsed(now) >= self.settle_after()
    }
}
