use egui::{Context, PointerButton, Pos2, Rect, Response};

use crate::stroke::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// One pointer observation in surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub position: Point,
    pub phase: PointerPhase,
}

impl PointerSample {
    pub fn down(x: f32, y: f32) -> Self {
        Self::new(Pos2::new(x, y), PointerPhase::Down)
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(Pos2::new(x, y), PointerPhase::Move)
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(Pos2::new(x, y), PointerPhase::Up)
    }

    pub fn new(position: Point, phase: PointerPhase) -> Self {
        Self { position, phase }
    }
}

/// Handles converting raw egui pointer input into ordered canvas samples
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
    /// Primary button went down on the canvas and has not been released yet
    pressed_on_canvas: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
            pressed_on_canvas: false,
        }
    }

    fn to_local(&self, pos: Pos2) -> Point {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Process this frame's egui input into samples, in delivery order.
    ///
    /// `canvas` is the response of the painter allocated for the canvas. Presses only count when
    /// it is hovered, so windows and popups layered over the canvas keep their clicks.
    pub fn process_input(&mut self, ctx: &Context, canvas: &Response) -> Vec<PointerSample> {
        self.canvas_rect = canvas.rect;
        let canvas_hovered = canvas.hovered();
        ctx.input(|input| {
            // A finished touch reports PointerGone in the same frame as the release,
            // but egui keeps the interact position around for it.
            let pos = input.pointer.interact_pos().or(input.pointer.latest_pos());
            self.collect(
                pos,
                input.pointer.button_pressed(PointerButton::Primary),
                input.pointer.button_released(PointerButton::Primary),
                canvas_hovered,
            )
        })
    }

    /// Core of [`InputHandler::process_input`], separated from egui for testing.
    ///
    /// Moves are reported while the canvas is hovered or while a press that started on it is
    /// held. A release ends the press wherever it happens, at the last known position if the
    /// pointer is already gone.
    pub fn collect(
        &mut self,
        pos: Option<Pos2>,
        pressed: bool,
        released: bool,
        canvas_hovered: bool,
    ) -> Vec<PointerSample> {
        let mut samples = Vec::new();

        if let Some(pos) = pos {
            let on_canvas = canvas_hovered && self.canvas_rect.contains(pos);

            if Some(pos) != self.last_pointer_pos && (on_canvas || self.pressed_on_canvas) {
                samples.push(PointerSample::new(self.to_local(pos), PointerPhase::Move));
            }
            self.last_pointer_pos = Some(pos);

            if pressed && on_canvas {
                self.pressed_on_canvas = true;
                samples.push(PointerSample::new(self.to_local(pos), PointerPhase::Down));
            }
        }

        if released && self.pressed_on_canvas {
            self.pressed_on_canvas = false;
            if let Some(last) = pos.or(self.last_pointer_pos) {
                samples.push(PointerSample::new(self.to_local(last), PointerPhase::Up));
            }
        }

        if pos.is_none() {
            self.last_pointer_pos = None;
        }

        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Vec2;

    fn handler() -> InputHandler {
        InputHandler::new(Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::splat(256.0)))
    }

    #[test]
    fn test_samples_are_canvas_local() {
        let mut input = handler();
        let samples = input.collect(Some(Pos2::new(110.0, 60.0)), true, false, true);
        assert_eq!(
            samples,
            vec![PointerSample::moved(10.0, 10.0), PointerSample::down(10.0, 10.0)]
        );
    }

    #[test]
    fn test_hover_outside_canvas_is_ignored() {
        let mut input = handler();
        assert!(input.collect(Some(Pos2::new(10.0, 10.0)), true, false, true).is_empty());
        assert!(input.collect(Some(Pos2::new(12.0, 10.0)), false, true, true).is_empty());
    }

    #[test]
    fn test_release_outside_canvas_ends_press() {
        let mut input = handler();
        input.collect(Some(Pos2::new(110.0, 60.0)), true, false, true);
        let samples = input.collect(Some(Pos2::new(400.0, 60.0)), false, true, true);
        assert_eq!(
            samples,
            vec![PointerSample::moved(300.0, 10.0), PointerSample::up(300.0, 10.0)]
        );
    }

    #[test]
    fn test_stationary_pointer_reports_no_move() {
        let mut input = handler();
        input.collect(Some(Pos2::new(110.0, 60.0)), false, false, true);
        assert!(input.collect(Some(Pos2::new(110.0, 60.0)), false, false, true).is_empty());
    }

    #[test]
    fn test_release_after_pointer_gone_ends_press() {
        let mut input = handler();
        input.collect(Some(Pos2::new(110.0, 60.0)), true, false, true);
        input.collect(Some(Pos2::new(150.0, 100.0)), false, false, true);
        // touchend: release and PointerGone arrive in the same frame
        let samples = input.collect(None, false, true, false);
        assert_eq!(samples, vec![PointerSample::up(50.0, 50.0)]);

        // the next tap starts a new press
        let samples = input.collect(Some(Pos2::new(300.0, 250.0)), true, false, true);
        assert_eq!(
            samples,
            vec![PointerSample::moved(200.0, 200.0), PointerSample::down(200.0, 200.0)]
        );
    }

    #[test]
    fn test_pointer_gone_without_press_reports_nothing() {
        let mut input = handler();
        input.collect(Some(Pos2::new(110.0, 60.0)), false, false, true);
        assert!(input.collect(None, false, true, false).is_empty());
    }

    #[test]
    fn test_press_on_window_over_canvas_is_ignored() {
        let mut input = handler();
        // inside the canvas rect, but another layer is on top
        assert!(input.collect(Some(Pos2::new(200.0, 200.0)), true, false, false).is_empty());
        assert!(input.collect(Some(Pos2::new(205.0, 200.0)), false, true, false).is_empty());

        let samples = input.collect(Some(Pos2::new(210.0, 200.0)), true, false, true);
        assert_eq!(
            samples,
            vec![PointerSample::moved(110.0, 150.0), PointerSample::down(110.0, 150.0)]
        );
    }

    #[test]
    fn test_covered_canvas_keeps_tracking_an_active_press() {
        let mut input = handler();
        input.collect(Some(Pos2::new(110.0, 60.0)), true, false, true);
        let samples = input.collect(Some(Pos2::new(120.0, 60.0)), false, true, false);
        assert_eq!(
            samples,
            vec![PointerSample::moved(20.0, 10.0), PointerSample::up(20.0, 10.0)]
        );
    }
}
