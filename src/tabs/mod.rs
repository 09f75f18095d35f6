//! The three application tabs.

pub mod add_existing;
pub mod folder_names;
pub mod structure;

use eframe::egui;

/// Result banner shown under a tab's action button.
#[derive(Debug, Clone)]
pub enum Feedback {
    Success(String),
    /// Completed, but some items were skipped.
    Warnings(String, Vec<String>),
    Error(String),
}

pub fn show_feedback(ui: &mut egui::Ui, feedback: &Feedback) {
    match feedback {
        Feedback::Success(msg) => {
            ui.colored_label(egui::Color32::LIGHT_GREEN, msg);
        }
        Feedback::Warnings(msg, warnings) => {
            ui.colored_label(egui::Color32::YELLOW, msg);
            for w in warnings {
                ui.colored_label(egui::Color32::YELLOW, format!("⚠ {w}"));
            }
        }
        Feedback::Error(msg) => {
            ui.colored_label(egui::Color32::LIGHT_RED, msg);
        }
    }
}
