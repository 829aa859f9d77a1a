//! Pointer state machine.
//!
//! ```text
//!            down (brush)            up
//!   Idle ────────────────► Drawing ──────► Idle   (commit stroke if it has a segment)
//!    │  ▲                   │   ▲
//!    │  │                   └───┘ move: append point
//!    │  │ down (place sticker)
//!    ▼  │
//!   PlacingSticker ◄─┐
//!    └───────────────┘ move (sticker tool): ghost follows the pointer
//! ```
//!
//! Tool changes never interrupt a stroke in progress; they only drop the preview.

use std::f32::consts::TAU;

use crate::drawable::Drawable;
use crate::preview::ToolPreview;
use crate::random::RandomSource;
use crate::sticker::Sticker;
use crate::stroke::{Point, StrokeBuilder};
use crate::input::{PointerPhase, PointerSample};
use crate::tool::{Tool, ToolState};

#[derive(Debug, Clone, Default)]
pub enum InputState {
    #[default]
    Idle,
    /// Primary button held with the brush
    Drawing(StrokeBuilder),
    /// A sticker tool is active and its ghost follows the pointer
    PlacingSticker(Sticker),
}

impl InputState {
    pub fn name(&self) -> &'static str {
        match self {
            InputState::Idle => "Idle",
            InputState::Drawing(_) => "Drawing",
            InputState::PlacingSticker(_) => "PlacingSticker",
        }
    }
}

/// What a pointer sample did to the session
#[derive(Debug, Clone, PartialEq)]
pub enum InputOutcome {
    Unchanged,
    /// Only the tool preview moved
    PreviewMoved,
    /// The live stroke was started or grew
    StrokeExtended,
    /// A live stroke without a segment was dropped
    StrokeDiscarded,
    /// A finished drawable must be appended to the history
    Commit(Drawable),
}

#[derive(Debug, Default)]
pub struct InputController {
    state: InputState,
    /// Last pointer position seen over the canvas
    hover: Option<Point>,
    /// Rotation given to the next sticker, rolled when a sticker tool is picked
    sticker_rotation: f32,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, InputState::Drawing(_))
    }

    /// The stroke being drawn, if any
    pub fn in_progress(&self) -> Option<&StrokeBuilder> {
        match &self.state {
            InputState::Drawing(builder) => Some(builder),
            _ => None,
        }
    }

    pub fn handle(
        &mut self,
        sample: PointerSample,
        tools: &ToolState,
        rng: &mut dyn RandomSource,
    ) -> InputOutcome {
        match sample.phase {
            PointerPhase::Down => self.on_pointer_down(sample.position, tools, rng),
            PointerPhase::Move => self.on_pointer_move(sample.position, tools),
            PointerPhase::Up => self.on_pointer_up(),
        }
    }

    fn on_pointer_down(
        &mut self,
        pos: Point,
        tools: &ToolState,
        rng: &mut dyn RandomSource,
    ) -> InputOutcome {
        self.hover = Some(pos);
        if self.is_drawing() {
            return InputOutcome::Unchanged;
        }

        match tools.active_tool() {
            Tool::Sticker(_) => match std::mem::take(&mut self.state) {
                InputState::PlacingSticker(sticker) => {
                    self.sticker_rotation = roll_rotation(rng);
                    log::debug!("placing sticker {} at {:?}", sticker.icon(), sticker.position());
                    InputOutcome::Commit(Drawable::Sticker(sticker))
                }
                // No ghost yet, so there is nowhere to place the sticker
                _ => InputOutcome::Unchanged,
            },
            Tool::Brush => {
                self.state = InputState::Drawing(StrokeBuilder::begin(
                    tools.color(),
                    tools.thickness(),
                    pos,
                ));
                log::debug!("stroke started at {pos:?}");
                InputOutcome::StrokeExtended
            }
        }
    }

    fn on_pointer_move(&mut self, pos: Point, tools: &ToolState) -> InputOutcome {
        self.hover = Some(pos);
        if let InputState::Drawing(builder) = &mut self.state {
            builder.add_point(pos);
            return InputOutcome::StrokeExtended;
        }

        match tools.active_tool() {
            Tool::Sticker(icon) => {
                self.state =
                    InputState::PlacingSticker(Sticker::new(icon.as_str(), pos, self.sticker_rotation));
            }
            Tool::Brush => self.state = InputState::Idle,
        }
        InputOutcome::PreviewMoved
    }

    fn on_pointer_up(&mut self) -> InputOutcome {
        if !self.is_drawing() {
            return InputOutcome::Unchanged;
        }
        let InputState::Drawing(builder) = std::mem::take(&mut self.state) else {
            return InputOutcome::Unchanged;
        };
        match builder.finish() {
            Some(stroke) => InputOutcome::Commit(Drawable::Stroke(stroke)),
            None => {
                log::debug!("discarding stroke without movement");
                InputOutcome::StrokeDiscarded
            }
        }
    }

    /// Drop any preview after the tool selection changed. A stroke in progress keeps going.
    pub fn on_tool_changed(&mut self, tools: &ToolState, rng: &mut dyn RandomSource) {
        if let Tool::Sticker(_) = tools.active_tool() {
            self.sticker_rotation = roll_rotation(rng);
        }
        if !self.is_drawing() {
            self.state = InputState::Idle;
        }
        self.hover = None;
    }

    /// Preview for the current state; recomputed on every call
    pub fn preview(&self, tools: &ToolState) -> Option<ToolPreview> {
        match &self.state {
            InputState::Drawing(_) => None,
            InputState::PlacingSticker(sticker) => Some(ToolPreview::Sticker(sticker.clone())),
            InputState::Idle => match (tools.active_tool(), self.hover) {
                (Tool::Brush, Some(position)) => Some(ToolPreview::Brush {
                    position,
                    thickness: tools.thickness(),
                }),
                _ => None,
            },
        }
    }
}

fn roll_rotation(rng: &mut dyn RandomSource) -> f32 {
    rng.next_unit() * TAU
}
