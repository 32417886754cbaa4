// src/ui/widgets.rs

use eframe::egui;

pub fn panel_title(ui: &mut egui::Ui, title: &str) {
    ui.heading(title);
}

pub fn large_button(text: &str) -> egui::Button<'_> {
    egui::Button::new(egui::RichText::new(text).size(16.0)).min_size(egui::vec2(140.0, 30.0))
}

/// Titled group box used for each form section.
pub fn section(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(10))
        .corner_radius(egui::CornerRadius::same(6))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(title).strong().size(15.0));
            ui.add_space(4.0);
            add_contents(ui);
        });
    ui.add_space(8.0);
}

/// Label + single-line text box. Returns true when edited.
pub fn text_row(ui: &mut egui::Ui, grid_label: &str, buf: &mut String, hint: &str) -> bool {
    ui.label(grid_label);
    let changed = ui
        .add(
            egui::TextEdit::singleline(buf)
                .hint_text(hint)
                .desired_width(320.0),
        )
        .changed();
    ui.end_row();
    changed
}

pub fn ui_notice(ui: &mut egui::Ui, body: &str) {
    let accent = egui::Color32::from_rgb(255, 215, 90);

    let stroke = egui::Stroke::new(1.5, accent);
    let fill = egui::Color32::from_rgba_unmultiplied(accent.r(), accent.g(), accent.b(), 48);

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .stroke(stroke)
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new("Notice")
                    .size(18.0)
                    .strong()
                    .color(accent),
            );
            ui.add_space(4.0);
            ui.label(body);
        });
}
