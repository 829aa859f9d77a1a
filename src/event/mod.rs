mod bus;
mod events;

pub use bus::EventBus;
pub use events::SketchEvent;

/// Receives every event emitted on an [`EventBus`] it is subscribed to
pub trait EventHandler {
    fn handle_event(&mut self, event: &SketchEvent);
}

/// Requests a repaint of the egui context whenever the sketch changes
pub struct RepaintOnChange {
    ctx: egui::Context,
}

impl RepaintOnChange {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl EventHandler for RepaintOnChange {
    fn handle_event(&mut self, _event: &SketchEvent) {
        self.ctx.request_repaint();
    }
}
