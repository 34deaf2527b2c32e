use phasebrot_core::{
    compute_pixel, Complex, InputEvent, Outcome, ViewportController, ViewportState,
};
use phasebrot_render::{fill, FrameBuffer, FrameRenderer};

#[test]
fn single_and_multi_worker_fills_are_identical() {
    let mut state = ViewportState::new(301, 187).unwrap();
    state.center = Complex::new(-0.74, 0.12);
    state.scale = 0.9;
    state.phase = 250;

    let one = FrameRenderer::new(1).unwrap();
    let many = FrameRenderer::new(8).unwrap();

    let mut a = FrameBuffer::for_viewport(&state).unwrap();
    let mut b = FrameBuffer::for_viewport(&state).unwrap();
    one.fill(&mut a, &state);
    many.fill(&mut b, &state);

    assert_eq!(a.pixels(), b.pixels());
}

#[test]
fn repeated_fills_are_deterministic() {
    let mut state = ViewportState::new(128, 96).unwrap();
    state.phase = 9;
    let mut a = FrameBuffer::for_viewport(&state).unwrap();
    let mut b = FrameBuffer::for_viewport(&state).unwrap();
    fill(&mut a, &state);
    fill(&mut b, &state);
    assert_eq!(a, b);
}

#[test]
fn driver_sequence_with_resize() {
    let ctl = ViewportController::default();
    let mut state = ViewportState::new(64, 48).unwrap();
    let mut buffer = FrameBuffer::for_viewport(&state).unwrap();
    let renderer = FrameRenderer::new(2).unwrap();

    let events = [
        InputEvent::Scroll { delta_y: 1.0 },
        InputEvent::Resized {
            width: 80,
            height: 30,
        },
        InputEvent::key("ArrowRight"),
    ];
    for event in &events {
        if let Outcome::Reallocate { width, height } = ctl.apply(&mut state, event) {
            buffer.resize(width, height).unwrap();
        }
    }

    let stats = renderer.fill(&mut buffer, &state);
    state.advance_frame();

    assert_eq!(stats.phase, 1);
    assert_eq!(state.phase, 2);
    assert_eq!(buffer.pixels().len(), 80 * 30);
    assert_eq!(buffer.get(40, 15), Some(compute_pixel(40, 15, &state_at(&state, 1))));
}

fn state_at(state: &ViewportState, phase: u64) -> ViewportState {
    ViewportState { phase, ..*state }
}
