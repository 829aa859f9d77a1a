use egui::Color32;

use crate::config::SketchConfig;
use crate::random::RandomSource;

#[derive(Debug, Clone, PartialEq)]
pub enum Tool {
    Brush,
    /// Stamp the given glyph
    Sticker(String),
}

impl Tool {
    pub fn sticker_icon(&self) -> Option<&str> {
        match self {
            Tool::Sticker(icon) => Some(icon),
            Tool::Brush => None,
        }
    }
}

/// Style and tool applied to the next drawable. Not part of the undo history.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    active_tool: Tool,
    thickness: f32,
    color: Color32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::from_config(&SketchConfig::default())
    }
}

impl ToolState {
    pub fn from_config(config: &SketchConfig) -> Self {
        Self {
            active_tool: Tool::Brush,
            thickness: config.default_thickness,
            color: config.stroke_color,
        }
    }

    pub fn active_tool(&self) -> &Tool {
        &self.active_tool
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn select_brush(&mut self, thickness: f32) {
        self.active_tool = Tool::Brush;
        self.thickness = thickness.max(f32::EPSILON);
    }

    pub fn select_sticker(&mut self, icon: impl Into<String>) {
        self.active_tool = Tool::Sticker(icon.into());
    }

    pub fn select_color(&mut self, color: Color32) {
        self.color = color;
    }

    /// Pick a fully saturated color with a random hue
    pub fn randomize_color(&mut self, rng: &mut dyn RandomSource) -> Color32 {
        let hue = rng.next_unit();
        self.color = egui::ecolor::Hsva::new(hue, 0.85, 1.0, 1.0).into();
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceRandom;

    #[test]
    fn test_default_tool_is_medium_white_brush() {
        let state = ToolState::default();
        assert_eq!(state.active_tool(), &Tool::Brush);
        assert_eq!(state.thickness(), 3.0);
        assert_eq!(state.color(), Color32::WHITE);
    }

    #[test]
    fn test_selecting_sticker_keeps_brush_style() {
        let mut state = ToolState::default();
        state.select_brush(5.0);
        state.select_sticker("😨");
        assert_eq!(state.active_tool().sticker_icon(), Some("😨"));
        assert_eq!(state.thickness(), 5.0);
    }

    #[test]
    fn test_randomize_color_is_deterministic_for_a_given_draw() {
        let mut a = ToolState::default();
        let mut b = ToolState::default();
        let ca = a.randomize_color(&mut SequenceRandom::new([0.3]));
        let cb = b.randomize_color(&mut SequenceRandom::new([0.3]));
        assert_eq!(ca, cb);
        assert_ne!(ca, Color32::WHITE);
    }
}
