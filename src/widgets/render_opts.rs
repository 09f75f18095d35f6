//! Shared fps / resolution / colour-workflow controls.

use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::core::entities::RenderSettings;
use crate::core::formats::{self, KNOWN_FPS, RES_PRESETS};

/// UI-side render options; `to_settings` resolves them into the scalar
/// parameters the templater consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    pub preset: String,
    pub width: u32,
    pub height: u32,
    pub fps_label: String,
    pub use_proxy: bool,
    pub use_aces: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            preset: "Custom".into(),
            width: 1920,
            height: 1080,
            fps_label: "23.976".into(),
            use_proxy: false,
            use_aces: false,
        }
    }
}

impl RenderOptions {
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Resolution Preset:");
            let before = self.preset.clone();
            egui::ComboBox::from_id_salt("res_preset")
                .selected_text(&self.preset)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.preset, "Custom".to_string(), "Custom");
                    for preset in RES_PRESETS {
                        ui.selectable_value(&mut self.preset, preset.name.to_string(), preset.name);
                    }
                });
            if self.preset != before {
                if let Some(p) = RES_PRESETS.iter().find(|p| p.name == self.preset) {
                    self.width = p.width;
                    self.height = p.height;
                }
            }

            ui.label("Width:");
            ui.add(egui::DragValue::new(&mut self.width).range(1..=20000));
            ui.label("Height:");
            ui.add(egui::DragValue::new(&mut self.height).range(1..=20000));
        });

        ui.horizontal(|ui| {
            ui.label("FPS:");
            egui::ComboBox::from_id_salt("fps")
                .selected_text(&self.fps_label)
                .show_ui(ui, |ui| {
                    for fps in KNOWN_FPS {
                        ui.selectable_value(&mut self.fps_label, (*fps).to_string(), *fps);
                    }
                });
            ui.checkbox(&mut self.use_proxy, "Enable Proxy Workflow");
            ui.checkbox(&mut self.use_aces, "Enable Aces Workflow");
        });
    }

    pub fn to_settings(&self) -> RenderSettings {
        RenderSettings {
            fps: formats::parse_fps(&self.fps_label),
            width: self.width,
            height: self.height,
            resolution_label: formats::resolution_label(self.width, self.height),
            use_proxy: self.use_proxy,
            use_aces: self.use_aces,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_resolve_label_and_fps() {
        let opts = RenderOptions { fps_label: "29.97".into(), ..Default::default() };
        let s = opts.to_settings();
        assert_eq!(s.fps, 29.97);
        assert_eq!(s.resolution_label, "HD_1080");

        let opts = RenderOptions { width: 640, height: 480, fps_label: "nope".into(), ..Default::default() };
        let s = opts.to_settings();
        assert_eq!(s.fps, 24.0);
        assert_eq!(s.resolution_label, "Custom_640x480");
    }
}
