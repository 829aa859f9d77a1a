use egui::Rect;

use crate::config::SketchConfig;
use crate::event::RepaintOnChange;
use crate::input::InputHandler;
use crate::panels::{central_panel, custom_sticker_prompt, tools_panel};
use crate::session::Session;

pub struct SketchApp {
    session: Session,
    input: InputHandler,
    /// Text of the custom sticker prompt while it is open
    sticker_prompt: Option<String>,
    /// Last export failure, shown until the next export
    last_error: Option<String>,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app = Self::with_config(SketchConfig::default());
        app.session
            .subscribe(Box::new(RepaintOnChange::new(cc.egui_ctx.clone())));
        app
    }

    pub fn with_config(config: SketchConfig) -> Self {
        Self {
            session: Session::new(config),
            input: InputHandler::new(Rect::NOTHING),
            sticker_prompt: None,
            last_error: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn open_sticker_prompt(&mut self) {
        self.sticker_prompt = Some("🙂".to_owned());
    }

    pub fn sticker_prompt_mut(&mut self) -> Option<&mut String> {
        self.sticker_prompt.as_mut()
    }

    /// Close the prompt, adding the glyph when `accept` is set
    pub fn close_sticker_prompt(&mut self, accept: bool) {
        if let Some(glyph) = self.sticker_prompt.take().filter(|_| accept) {
            self.session.add_custom_sticker(&glyph);
        }
    }

    pub fn export(&mut self) {
        self.last_error = match self.session.export() {
            Ok(()) => None,
            Err(err) => {
                log::warn!("export failed: {err}");
                Some(err.to_string())
            }
        };
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("title").show(ctx, |ui| {
            ui.heading(self.session.config().title.as_str());
        });

        tools_panel(self, ctx);
        central_panel(self, ctx);
        custom_sticker_prompt(self, ctx);
    }
}
