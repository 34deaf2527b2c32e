use serde::{Deserialize, Serialize};

/// Held pointer buttons, as a bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonMask(pub u8);

impl ButtonMask {
    pub const NONE: Self = Self(0);
    pub const PRIMARY: Self = Self(1);
    pub const SECONDARY: Self = Self(1 << 1);
    pub const MIDDLE: Self = Self(1 << 2);

    #[inline]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for ButtonMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// One discrete event from the windowing layer.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The window was asked to close.
    Quit,
    /// A key went down. `key` is its symbolic name (e.g. `"Space"`, `"F"`).
    KeyDown { key: String },
    /// Wheel motion; positive `delta_y` scrolls up.
    Scroll { delta_y: f64 },
    /// Pointer motion by `(dx, dy)` pixels while `buttons` were held.
    PointerMotion { buttons: ButtonMask, dx: f64, dy: f64 },
    /// The drawable area changed size.
    Resized { width: u32, height: u32 },
}

impl InputEvent {
    pub fn key(name: impl Into<String>) -> Self {
        Self::KeyDown { key: name.into() }
    }
}

/// A keyboard-triggered command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ResetView,
    TogglePause,
    StepBack,
    StepForward,
    Snapshot,
}

/// Symbolic key names bound to each [`Action`].
///
/// Names are compared case-insensitively. Missing fields fall back to
/// the defaults on deserialization, so a config file can rebind just one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub quit: String,
    pub reset_view: String,
    pub toggle_pause: String,
    pub step_back: String,
    pub step_forward: String,
    pub snapshot: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "Escape".into(),
            reset_view: "F".into(),
            toggle_pause: "Space".into(),
            step_back: "ArrowLeft".into(),
            step_forward: "ArrowRight".into(),
            snapshot: "P".into(),
        }
    }
}

impl KeyBindings {
    /// The action bound to `key`, if any. Earlier entries win on conflicts.
    pub fn action_for(&self, key: &str) -> Option<Action> {
        [
            (&self.quit, Action::Quit),
            (&self.reset_view, Action::ResetView),
            (&self.toggle_pause, Action::TogglePause),
            (&self.step_back, Action::StepBack),
            (&self.step_forward, Action::StepForward),
            (&self.snapshot, Action::Snapshot),
        ]
        .into_iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, action)| action)
    }
}
