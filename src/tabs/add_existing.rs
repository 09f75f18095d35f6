//! "Add to Existing Project" tab: append sequences/shots to checked folders
//! of an already-created project.

use eframe::egui;
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::{apply, plan, preview};
use crate::tabs::{show_feedback, Feedback};
use crate::widgets::fs_tree::{self, DirNode};
use crate::widgets::render_opts::RenderOptions;
use crate::widgets::seq_list::SequenceList;

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct AddExistingTab {
    pub project_root: String,
    /// Rescanned on browse; not persisted across sessions.
    #[serde(skip)]
    pub tree: Vec<DirNode>,
    /// Explicit designation: also create project/render plus a comp script
    /// per shot under every checked folder.
    pub comp_scripts: bool,
    pub render: RenderOptions,
    pub sequences: SequenceList,
    #[serde(skip)]
    pub feedback: Option<Feedback>,
}

impl Default for AddExistingTab {
    fn default() -> Self {
        Self {
            project_root: String::new(),
            tree: Vec::new(),
            comp_scripts: false,
            render: RenderOptions::default(),
            sequences: SequenceList::default(),
            feedback: None,
        }
    }
}

impl AddExistingTab {
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Select Project:");
            ui.add(egui::TextEdit::singleline(&mut self.project_root).desired_width(320.0));
            if ui.button("Browse…").clicked() {
                if let Some(folder) = rfd::FileDialog::new()
                    .set_title("Select Existing Project Folder")
                    .pick_folder()
                {
                    self.browse_project(&folder);
                }
            }
        });
        ui.horizontal(|ui| {
            ui.checkbox(&mut self.comp_scripts, "Nuke Script?");
        });
        self.render.ui(ui);
        ui.separator();

        let preview_text = self.preview_text();
        ui.columns(3, |cols| {
            cols[0].group(|ui| {
                ui.label("Existing Project Structure (check to add):");
                egui::ScrollArea::vertical()
                    .id_salt("existing_tree")
                    .auto_shrink([false, false])
                    .max_height(ui.available_height() - 40.0)
                    .show(ui, |ui| {
                        if self.tree.is_empty() {
                            ui.label("No valid project folder selected.");
                        } else {
                            fs_tree::ui_tree(ui, &mut self.tree);
                        }
                    });
            });
            cols[1].group(|ui| {
                ui.label("Add Sequences / Shots");
                egui::ScrollArea::vertical()
                    .id_salt("add_seqs")
                    .auto_shrink([false, false])
                    .max_height(ui.available_height() - 40.0)
                    .show(ui, |ui| {
                        self.sequences.ui(ui);
                    });
            });
            cols[2].group(|ui| {
                ui.label("Preview of New Structure:");
                egui::ScrollArea::vertical()
                    .id_salt("add_preview")
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
            .add_sized([ui.available_width(), 28.0], egui::Button::new("Add Folders & Shots"))
            .clicked()
        {
            self.on_execute();
        }
        if let Some(feedback) = &self.feedback {
            show_feedback(ui, feedback);
        }
    }

    fn browse_project(&mut self, folder: &Path) {
        self.project_root = folder.display().to_string();
        match fs_tree::scan_dir_tree(folder) {
            Ok(tree) => {
                info!("Scanned project tree at {}", folder.display());
                self.tree = tree;
                self.feedback = None;
            }
            Err(e) => {
                error!("{e:#}");
                self.tree.clear();
                self.feedback = Some(Feedback::Error(format!("{e:#}")));
            }
        }
    }

    fn current_plan(&self) -> plan::AdditionPlan {
        let root = PathBuf::from(self.project_root.trim());
        let targets = fs_tree::checked_paths(&self.tree);
        plan::addition_plan(&root, &targets, &self.sequences.entries(), self.comp_scripts)
    }

    fn preview_text(&self) -> String {
        if self.project_root.trim().is_empty() {
            return "No valid project folder selected.".to_string();
        }
        let root = PathBuf::from(self.project_root.trim());
        preview::render_additions_preview(&root, &self.current_plan())
    }

    fn on_execute(&mut self) {
        let root = PathBuf::from(self.project_root.trim());
        if self.project_root.trim().is_empty() || !root.is_dir() {
            self.feedback = Some(Feedback::Error("No valid existing project folder.".into()));
            return;
        }
        let plan = self.current_plan();
        if plan.groups.is_empty() {
            self.feedback = Some(Feedback::Error(
                "Check at least one folder and add at least one sequence or shot.".into(),
            ));
            return;
        }

        match apply::apply_additions(&plan, &self.render.to_settings()) {
            Ok(report) if report.collisions.is_empty() => {
                self.feedback = Some(Feedback::Success(format!(
                    "Sequences/Shots added: {} folders, {} files.",
                    report.dirs_created, report.files_written
                )));
            }
            Ok(report) => {
                self.feedback = Some(Feedback::Warnings(
                    format!(
                        "Done with {} skipped item(s): {} folders, {} files.",
                        report.collisions.len(),
                        report.dirs_created,
                        report.files_written
                    ),
                    report.collisions,
                ));
            }
            Err(e) => {
                error!("{e:#}");
                self.feedback = Some(Feedback::Error(format!("{e:#}")));
            }
        }
    }
}
