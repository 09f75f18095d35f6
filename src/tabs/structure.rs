//! "Structure" tab: create a fresh show tree.

use chrono::Local;
use eframe::egui;
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::FolderConfig;
use crate::core::entities::{sanitize_name, show_root, CreationMode};
use crate::core::template::{scan_template, TemplateEntry};
use crate::core::{apply, plan, preview};
use crate::tabs::{show_feedback, Feedback};
use crate::widgets::render_opts::RenderOptions;
use crate::widgets::seq_list::SequenceList;

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct StructureTab {
    pub show_name: String,
    pub destination: String,
    pub mode: CreationMode,
    pub template_root: String,
    pub template_entries: Vec<TemplateEntry>,
    pub render: RenderOptions,
    pub sequences: SequenceList,
    #[serde(skip)]
    pub feedback: Option<Feedback>,
}

impl Default for StructureTab {
    fn default() -> Self {
        Self {
            show_name: String::new(),
            destination: String::new(),
            mode: CreationMode::Fixed,
            template_root: String::new(),
            template_entries: Vec::new(),
            render: RenderOptions::default(),
            sequences: SequenceList::default(),
            feedback: None,
        }
    }
}

impl StructureTab {
    pub fn ui(&mut self, ui: &mut egui::Ui, cfg: &FolderConfig) {
        egui::Grid::new("structure_inputs")
            .num_columns(3)
            .spacing([10.0, 5.0])
            .show(ui, |ui| {
                ui.label("Show Name:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.show_name)
                        .hint_text("Project name (max 25 chars)")
                        .char_limit(25)
                        .desired_width(240.0),
                );
                ui.end_row();

                ui.label("Destination Folder:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.destination).desired_width(240.0),
                );
                if ui.button("Browse…").clicked() {
                    if let Some(folder) = rfd::FileDialog::new()
                        .set_title("Select Destination Folder")
                        .pick_folder()
                    {
                        self.destination = folder.display().to_string();
                    }
                }
                ui.end_row();

                ui.label("Creation Mode:");
                egui::ComboBox::from_id_salt("creation_mode")
                    .selected_text(self.mode.label())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.mode, CreationMode::Fixed, "Hardcoded");
                        ui.selectable_value(&mut self.mode, CreationMode::Template, "Template");
                    });
                ui.end_row();

                ui.label("Template Folder:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.template_root).desired_width(240.0),
                );
                if ui.button("Browse…").clicked() {
                    if let Some(folder) = rfd::FileDialog::new()
                        .set_title("Select Template Folder")
                        .pick_folder()
                    {
                        self.browse_template(&folder);
                    }
                }
                ui.end_row();
            });

        self.render.ui(ui);
        ui.separator();

        let preview_text = self.preview_text(cfg);
        ui.columns(2, |cols| {
            cols[0].group(|ui| {
                ui.label("Add Sequences / Shots");
                egui::ScrollArea::vertical()
                    .id_salt("structure_seqs")
                    .auto_shrink([false, false])
                    .max_height(ui.available_height() - 40.0)
                    .show(ui, |ui| {
                        self.sequences.ui(ui);
                        if self.mode == CreationMode::Template
                            && !self.template_entries.is_empty()
                        {
                            ui.separator();
                            ui.label("Template folders (tick comp roots):");
                            for entry in &mut self.template_entries {
                                ui.checkbox(&mut entry.comp_role, &entry.rel_path);
                            }
                        }
                    });
            });
            cols[1].group(|ui| {
                ui.label("Folder Structure Preview:");
                egui::ScrollArea::vertical()
                    .id_salt("structure_preview")
                    .auto_shrink([false, false])
                    .max_height(ui.available_height() - 40.0)
                    .show(ui, |ui| {
                        ui.add(
                            egui::TextEdit::multiline(&mut preview_text.as_str())
                                .font(egui::TextStyle::Monospace)
                                .desired_width(f32::INFINITY),
                        );
                    });
            });
        });

        if ui
            .add_sized([ui.available_width(), 28.0], egui::Button::new("Create Folder Structure"))
            .clicked()
        {
            self.on_create(cfg);
        }
        if let Some(feedback) = &self.feedback {
            show_feedback(ui, feedback);
        }
    }

    /// Capture the template tree once; re-browsing replaces the capture.
    fn browse_template(&mut self, folder: &Path) {
        self.template_root = folder.display().to_string();
        match scan_template(folder) {
            Ok(entries) => {
                info!("Captured {} template folders from {}", entries.len(), folder.display());
                self.template_entries = entries;
                self.feedback = None;
            }
            Err(e) => {
                error!("{e:#}");
                self.template_entries.clear();
                self.feedback = Some(Feedback::Error(format!("{e:#}")));
            }
        }
    }

    fn preview_text(&self, cfg: &FolderConfig) -> String {
        let seqs = self.sequences.entries();
        preview::render_structure_preview(&preview::StructurePreview {
            show_name: &self.show_name,
            destination: &self.destination,
            mode: self.mode,
            fps_label: &self.render.fps_label,
            width: self.render.width,
            height: self.render.height,
            use_proxy: self.render.use_proxy,
            use_aces: self.render.use_aces,
            date: Local::now().date_naive(),
            template_root: &self.template_root,
            template_entries: &self.template_entries,
            cfg,
            seqs: &seqs,
        })
    }

    fn on_create(&mut self, cfg: &FolderConfig) {
        // All validation happens before any filesystem mutation.
        let show = sanitize_name(&self.show_name);
        if show.is_empty() {
            self.feedback = Some(Feedback::Error("Please enter a Show Name.".into()));
            return;
        }
        let dest = PathBuf::from(self.destination.trim());
        if self.destination.trim().is_empty() || !dest.is_dir() {
            self.feedback = Some(Feedback::Error("Please pick a valid Destination Folder.".into()));
            return;
        }

        let root = show_root(&dest, &show, Local::now().date_naive());
        if root.exists() {
            self.feedback = Some(Feedback::Error(format!(
                "Folder '{}' already exists. Aborting.",
                root.display()
            )));
            return;
        }

        let seqs = self.sequences.entries();
        let plan = match self.mode {
            CreationMode::Fixed => plan::fixed_plan(&root, cfg, &seqs),
            CreationMode::Template => {
                let template_root = Path::new(self.template_root.trim());
                if self.template_entries.is_empty() || !template_root.is_dir() {
                    self.feedback = Some(Feedback::Error(
                        "Please pick a valid Template folder for Template mode.".into(),
                    ));
                    return;
                }
                plan::template_plan(&root, &self.template_entries, &seqs)
            }
        };

        match apply::apply_plan(&plan, &self.render.to_settings()) {
            Ok(report) => {
                info!("Created show tree at {}", root.display());
                self.feedback = Some(Feedback::Success(format!(
                    "Created {} folders and {} files under {}.",
                    report.dirs_created,
                    report.files_written,
                    root.display()
                )));
            }
            Err(e) => {
                error!("{e:#}");
                self.feedback = Some(Feedback::Error(format!("{e:#}")));
            }
        }
    }
}
