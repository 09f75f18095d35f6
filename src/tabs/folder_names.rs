//! "Folder Names" tab: edit the fixed-layout folder names.

use eframe::egui;

use crate::config::FolderConfig;

fn name_field(ui: &mut egui::Ui, text: &mut String) {
    ui.add(egui::TextEdit::singleline(text).desired_width(220.0));
}

pub fn ui(ui: &mut egui::Ui, cfg: &mut FolderConfig) {
    ui.label("Folder Structure (edit names):");
    ui.add_space(4.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            name_field(ui, &mut cfg.plates);
            ui.indent("plates", |ui| {
                name_field(ui, &mut cfg.plates_aspera);
                name_field(ui, &mut cfg.plates_manifest);
            });

            name_field(ui, &mut cfg.support);
            ui.indent("support", |ui| {
                name_field(ui, &mut cfg.support_luts);
                ui.indent("luts", |ui| {
                    name_field(ui, &mut cfg.support_luts_camera);
                    name_field(ui, &mut cfg.support_luts_show);
                });
                name_field(ui, &mut cfg.support_edl_xml);
                name_field(ui, &mut cfg.support_guides);
                name_field(ui, &mut cfg.support_camera_data);
            });

            name_field(ui, &mut cfg.references);
            ui.indent("references", |ui| {
                name_field(ui, &mut cfg.references_client_brief);
                name_field(ui, &mut cfg.references_artwork);
                name_field(ui, &mut cfg.references_style_guides);
            });

            name_field(ui, &mut cfg.vfx);
            name_field(ui, &mut cfg.comp);

            name_field(ui, &mut cfg.mograph);
            ui.indent("mograph", |ui| {
                name_field(ui, &mut cfg.mograph_projects);
                name_field(ui, &mut cfg.mograph_render);
            });

            name_field(ui, &mut cfg.shared);
            ui.indent("shared", |ui| {
                name_field(ui, &mut cfg.shared_stock_footage);
                name_field(ui, &mut cfg.shared_graphics);
                name_field(ui, &mut cfg.shared_fonts);
                name_field(ui, &mut cfg.shared_templates);
            });

            name_field(ui, &mut cfg.output);
            ui.indent("output", |ui| {
                name_field(ui, &mut cfg.output_date);
                ui.indent("date", |ui| {
                    name_field(ui, &mut cfg.output_full_res);
                    name_field(ui, &mut cfg.output_proxy);
                });
            });

            ui.add_space(8.0);
            if ui.button("Reset to defaults").clicked() {
                *cfg = FolderConfig::default();
            }
        });
}
