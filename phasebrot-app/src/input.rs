use eframe::egui;

use phasebrot_core::{ButtonMask, InputEvent, KeyBindings};

/// Key that toggles the HUD, unless a configured action already uses it.
pub(crate) const HUD_KEY: egui::Key = egui::Key::H;

/// `true` when the HUD may take [`HUD_KEY`]: no action is bound to it.
pub(crate) fn hud_key_free(bindings: &KeyBindings) -> bool {
    bindings.action_for(HUD_KEY.name()).is_none()
}

/// Buttons currently held, as the controller's mask.
fn held_buttons(pointer: &egui::PointerState) -> ButtonMask {
    let mut mask = ButtonMask::NONE;
    if pointer.primary_down() {
        mask = mask | ButtonMask::PRIMARY;
    }
    if pointer.secondary_down() {
        mask = mask | ButtonMask::SECONDARY;
    }
    if pointer.middle_down() {
        mask = mask | ButtonMask::MIDDLE;
    }
    mask
}

/// One `Scroll` per wheel event with vertical motion. Events are never
/// summed: each notch is one zoom step.
fn wheel_events(deltas: impl IntoIterator<Item = f32>, hovered: bool) -> Vec<InputEvent> {
    if !hovered {
        return Vec::new();
    }
    deltas
        .into_iter()
        .filter(|dy| *dy != 0.0)
        .map(|dy| InputEvent::Scroll {
            delta_y: dy as f64,
        })
        .collect()
}

/// Translate this frame's egui input into controller events, in order:
/// close request, size change, key presses, wheel, drag.
///
/// `hud_key_free` says whether [`HUD_KEY`] is kept back for the HUD.
pub(crate) fn collect_events(
    ctx: &egui::Context,
    response: &egui::Response,
    canvas_size: [u32; 2],
    hud_key_free: bool,
) -> Vec<InputEvent> {
    let mut events = Vec::new();

    // Query the response before taking the input lock; it reads input itself.
    let hovered = response.hovered();
    let drag_delta = if response.dragged() {
        response.drag_delta()
    } else {
        egui::Vec2::ZERO
    };

    ctx.input(|i| {
        if i.viewport().close_requested() {
            events.push(InputEvent::Quit);
        }

        events.push(InputEvent::Resized {
            width: canvas_size[0],
            height: canvas_size[1],
        });

        for event in &i.events {
            if let egui::Event::Key {
                key, pressed: true, ..
            } = event
            {
                if !(hud_key_free && *key == HUD_KEY) {
                    events.push(InputEvent::key(key.name()));
                }
            }
        }

        let wheel = i.events.iter().filter_map(|event| match event {
            egui::Event::MouseWheel { delta, .. } => Some(delta.y),
            _ => None,
        });
        events.extend(wheel_events(wheel, hovered));

        if drag_delta != egui::Vec2::ZERO {
            events.push(InputEvent::PointerMotion {
                buttons: held_buttons(&i.pointer),
                dx: drag_delta.x as f64,
                dy: drag_delta.y as f64,
            });
        }
    });

    events
}
