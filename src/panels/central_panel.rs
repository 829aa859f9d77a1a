use crate::SketchApp;
use crate::surface::PainterSurface;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let size = app.session().config().canvas_vec();
        let (response, painter) = ui.allocate_painter(size, egui::Sense::drag());
        let canvas_rect = response.rect;

        // Handle input
        let samples = app.input_mut().process_input(ctx, &response);
        app.session_mut().handle_pointer_samples(samples);

        // Render the canvas
        let mut surface = PainterSurface::new(&painter, canvas_rect);
        app.session().render(&mut surface);

        if let Some(error) = app.last_error() {
            ui.colored_label(egui::Color32::LIGHT_RED, format!("Export failed: {error}"));
        }
    });
}

/// Modal asking for a custom sticker glyph
pub fn custom_sticker_prompt(app: &mut SketchApp, ctx: &egui::Context) {
    let mut decision = None;
    if let Some(glyph) = app.sticker_prompt_mut() {
        egui::Window::new("Custom sticker")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Enter a new emoji or character for your sticker:");
                let edit = ui.text_edit_singleline(glyph);
                let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() || submitted {
                        decision = Some(true);
                    }
                    if ui.button("Cancel").clicked() {
                        decision = Some(false);
                    }
                });
            });
    }
    if let Some(accept) = decision {
        app.close_sticker_prompt(accept);
    }
}
