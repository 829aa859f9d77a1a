use egui::color_picker::{Alpha, color_edit_button_srgba};

use crate::SketchApp;
use crate::drawable::Drawable;
use crate::tool::Tool;

const THICKNESS_LABELS: [&str; 3] = ["Thin", "Medium", "Thick"];

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            ui.horizontal(|ui| {
                let history = app.session().history();
                let (can_undo, can_redo) = (history.can_undo(), history.can_redo());

                if ui.button("Clear Canvas").clicked() {
                    app.session_mut().clear();
                }
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.session_mut().undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.session_mut().redo();
                }
            });
            ui.separator();

            // Brush presets
            let presets = app.session().config().thickness_presets;
            ui.horizontal(|ui| {
                for (label, thickness) in THICKNESS_LABELS.iter().zip(presets) {
                    let tools = app.session().tools();
                    let is_selected =
                        *tools.active_tool() == Tool::Brush && tools.thickness() == thickness;
                    if ui.selectable_label(is_selected, *label).clicked() {
                        app.session_mut().select_brush(thickness);
                    }
                }
            });

            ui.horizontal(|ui| {
                let mut color = app.session().tools().color();
                ui.label("Color:");
                if color_edit_button_srgba(ui, &mut color, Alpha::Opaque).changed() {
                    app.session_mut().select_color(color);
                }
                if ui.button("Random color").clicked() {
                    app.session_mut().randomize_color();
                }
            });
            ui.separator();

            // Stickers
            let icons: Vec<String> = app
                .session()
                .palette()
                .stickers()
                .iter()
                .map(|sticker| sticker.icon.clone())
                .collect();
            ui.horizontal_wrapped(|ui| {
                for icon in &icons {
                    let is_selected =
                        app.session().tools().active_tool().sticker_icon() == Some(icon.as_str());
                    if ui.selectable_label(is_selected, icon.as_str()).clicked() {
                        app.session_mut().select_sticker(icon);
                    }
                }
            });
            if ui.button("Add Custom Sticker").clicked() {
                app.open_sticker_prompt();
            }
            ui.separator();

            if ui.button("Export").clicked() {
                app.export();
            }
            ui.separator();

            let history = app.session().history();
            ui.horizontal(|ui| {
                ui.label(format!("Undo stack size: {}", history.len()));
                ui.label(format!("Redo stack size: {}", history.redo_len()));
            });

            egui::ScrollArea::vertical().show(ui, |ui| {
                for (index, drawable) in history.snapshot().iter().enumerate().rev() {
                    let label = match drawable {
                        Drawable::Stroke(stroke) => {
                            format!("{index}: stroke, {} points", stroke.points().len())
                        }
                        Drawable::Sticker(sticker) => format!("{index}: sticker {}", sticker.icon()),
                    };
                    ui.label(label);
                }
            });

            ui.label(format!("(State: {})", app.session().controller().state().name()));
        });
}
