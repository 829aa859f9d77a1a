use egui::Color32;

use crate::config::SketchConfig;
use crate::controller::{InputController, InputOutcome};
use crate::error::SketchResult;
use crate::event::{EventBus, EventHandler, SketchEvent};
use crate::export;
use crate::history::History;
use crate::input::PointerSample;
use crate::preview::ToolPreview;
use crate::random::{OsRandom, RandomSource};
use crate::renderer::Renderer;
use crate::sticker::StickerPalette;
use crate::surface::Surface;
use crate::tool::ToolState;

/// One editing session: the history, the tool selection and the pointer state machine.
///
/// All mutation goes through this type, and every change is announced on its [`EventBus`].
pub struct Session {
    config: SketchConfig,
    history: History,
    tools: ToolState,
    controller: InputController,
    palette: StickerPalette,
    renderer: Renderer,
    events: EventBus,
    rng: Box<dyn RandomSource>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("history", &self.history)
            .field("tools", &self.tools)
            .field("state", &self.controller.state().name())
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SketchConfig::default())
    }
}

impl Session {
    pub fn new(config: SketchConfig) -> Self {
        Self::with_random(config, Box::new(OsRandom))
    }

    /// Session with a caller supplied source for sticker rotations and random colors
    pub fn with_random(config: SketchConfig, rng: Box<dyn RandomSource>) -> Self {
        Self {
            tools: ToolState::from_config(&config),
            renderer: Renderer::new(&config),
            history: History::new(),
            controller: InputController::new(),
            palette: StickerPalette::default(),
            events: EventBus::new(),
            rng,
            config,
        }
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn palette(&self) -> &StickerPalette {
        &self.palette
    }

    pub fn controller(&self) -> &InputController {
        &self.controller
    }

    pub fn is_drawing(&self) -> bool {
        self.controller.is_drawing()
    }

    pub fn preview(&self) -> Option<ToolPreview> {
        self.controller.preview(&self.tools)
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.events.subscribe(handler);
    }

    pub fn handle_pointer(&mut self, sample: PointerSample) {
        let outcome = self
            .controller
            .handle(sample, &self.tools, self.rng.as_mut());
        match outcome {
            InputOutcome::Unchanged => {}
            InputOutcome::PreviewMoved => self.events.emit(SketchEvent::ToolMoved),
            InputOutcome::StrokeExtended | InputOutcome::StrokeDiscarded => {
                self.events.emit(SketchEvent::DrawingChanged)
            }
            InputOutcome::Commit(drawable) => {
                log::info!("committed {} (#{})", drawable.kind(), self.history.len() + 1);
                self.history.commit(drawable);
                self.events.emit(SketchEvent::DrawingChanged);
            }
        }
    }

    /// Feed samples in delivery order
    pub fn handle_pointer_samples(&mut self, samples: impl IntoIterator<Item = PointerSample>) {
        for sample in samples {
            self.handle_pointer(sample);
        }
    }

    pub fn clear(&mut self) {
        log::info!("clearing canvas ({} drawables)", self.history.len());
        self.history.clear();
        self.events.emit(SketchEvent::DrawingChanged);
    }

    pub fn undo(&mut self) {
        if self.history.undo() {
            log::info!("undo, {} drawables left", self.history.len());
            self.events.emit(SketchEvent::DrawingChanged);
        }
    }

    pub fn redo(&mut self) {
        if self.history.redo() {
            log::info!("redo, {} drawables", self.history.len());
            self.events.emit(SketchEvent::DrawingChanged);
        }
    }

    pub fn select_brush(&mut self, thickness: f32) {
        log::info!("brush selected with thickness {thickness}");
        self.tools.select_brush(thickness);
        self.tool_changed();
    }

    pub fn select_sticker(&mut self, icon: &str) {
        log::info!("sticker tool selected: {icon}");
        self.tools.select_sticker(icon);
        self.tool_changed();
    }

    /// Color changes keep the current tool, so the ghost sticker and its rotation stay put.
    pub fn select_color(&mut self, color: Color32) {
        self.tools.select_color(color);
        self.events.emit(SketchEvent::ToolChanged);
    }

    pub fn randomize_color(&mut self) -> Color32 {
        let color = self.tools.randomize_color(self.rng.as_mut());
        log::info!("random brush color {color:?}");
        self.events.emit(SketchEvent::ToolChanged);
        color
    }

    /// Add a glyph to the sticker palette. Empty input, as from a cancelled prompt, is ignored.
    pub fn add_custom_sticker(&mut self, glyph: &str) -> Option<String> {
        match self.palette.add_custom(glyph) {
            Some(spec) => {
                log::info!("added custom sticker {} ({})", spec.icon, spec.name);
                let icon = spec.icon.clone();
                self.events.emit(SketchEvent::ToolChanged);
                Some(icon)
            }
            None => {
                log::warn!("ignoring empty custom sticker");
                None
            }
        }
    }

    fn tool_changed(&mut self) {
        self.controller
            .on_tool_changed(&self.tools, self.rng.as_mut());
        self.events.emit(SketchEvent::ToolChanged);
    }

    /// Clear `surface` and replay the whole session onto it
    pub fn render(&self, surface: &mut dyn Surface) {
        let preview = self.preview();
        self.renderer.redraw(
            surface,
            &self.history,
            self.controller.in_progress(),
            preview.as_ref(),
        );
    }

    /// Encode the committed drawables as a PNG at the configured export scale
    pub fn export_png(&self) -> SketchResult<Vec<u8>> {
        export::export_png(&self.history, &self.config)
    }

    /// Export and hand the PNG to the user under the configured file name
    pub fn export(&self) -> SketchResult<()> {
        let bytes = self.export_png()?;
        export::save_export(&bytes, &self.config.export_file_name)
    }
}
