use tracing::{debug, info};

use crate::input::{Action, ButtonMask, InputEvent, KeyBindings};
use crate::viewport::ViewportState;

/// What the driver must do after an event has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing beyond drawing the next frame.
    Continue,
    /// Stop the loop and exit normally.
    Quit,
    /// The buffer must be reallocated to these dimensions before the next fill.
    Reallocate { width: u32, height: u32 },
    /// Save the current frame.
    Snapshot,
}

/// Maps input events onto [`ViewportState`] transitions.
///
/// Holds no view state of its own; the state is passed in so several
/// independent views can share one controller.
#[derive(Debug, Clone, Default)]
pub struct ViewportController {
    bindings: KeyBindings,
}

impl ViewportController {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Apply one event to `state`. The transition is complete on return.
    pub fn apply(&self, state: &mut ViewportState, event: &InputEvent) -> Outcome {
        match event {
            InputEvent::Quit => Outcome::Quit,
            InputEvent::KeyDown { key } => match self.bindings.action_for(key) {
                Some(action) => self.run(state, action),
                None => Outcome::Continue,
            },
            InputEvent::Scroll { delta_y } => {
                if *delta_y > 0.0 {
                    state.zoom_in();
                } else if *delta_y < 0.0 {
                    state.zoom_out();
                }
                Outcome::Continue
            }
            InputEvent::PointerMotion { buttons, dx, dy } => {
                if buttons.contains(ButtonMask::PRIMARY) {
                    state.pan(*dx, *dy);
                }
                Outcome::Continue
            }
            InputEvent::Resized { width, height } => {
                if state.resize(*width, *height) {
                    info!(width, height, "Viewport resized");
                    Outcome::Reallocate {
                        width: *width,
                        height: *height,
                    }
                } else {
                    Outcome::Continue
                }
            }
        }
    }

    fn run(&self, state: &mut ViewportState, action: Action) -> Outcome {
        debug!(?action, "Key action");
        match action {
            Action::Quit => return Outcome::Quit,
            Action::Snapshot => return Outcome::Snapshot,
            Action::ResetView => state.reset_view(),
            Action::TogglePause => state.toggle_pause(),
            Action::StepBack => state.step_back(),
            Action::StepForward => state.step_forward(),
        }
        Outcome::Continue
    }
}
