//! Editable sequence/shot list, shared by the Structure and Add tabs.

use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::core::entities::{sanitize_name, SequenceEntry};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceRow {
    pub name: String,
    pub shots: Vec<String>,
}

impl Default for SequenceRow {
    fn default() -> Self {
        // Start with one empty shot line, like a freshly added sequence.
        Self { name: String::new(), shots: vec![String::new()] }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceList {
    pub rows: Vec<SequenceRow>,
}

impl Default for SequenceList {
    fn default() -> Self {
        Self { rows: vec![SequenceRow::default()] }
    }
}

impl SequenceList {
    /// Trimmed, sanitized entries. A row is kept when it still has a name or
    /// at least one shot after sanitization.
    pub fn entries(&self) -> Vec<SequenceEntry> {
        self.rows
            .iter()
            .filter_map(|row| {
                let name = sanitize_name(&row.name);
                let shots: Vec<String> = row
                    .shots
                    .iter()
                    .map(|s| sanitize_name(s))
                    .filter(|s| !s.is_empty())
                    .collect();
                if name.is_empty() && shots.is_empty() {
                    None
                } else {
                    Some(SequenceEntry { name, shots })
                }
            })
            .collect()
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let mut insert_row_after: Option<usize> = None;
        let mut remove_row: Option<usize> = None;

        for (i, row) in self.rows.iter_mut().enumerate() {
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut row.name)
                        .hint_text("Sequence Name (max 25 chars)")
                        .char_limit(25)
                        .desired_width(180.0),
                );
                if ui.small_button("-").clicked() {
                    remove_row = Some(i);
                }
                if ui.small_button("+").clicked() {
                    insert_row_after = Some(i);
                }
            });

            let mut insert_shot_after: Option<usize> = None;
            let mut remove_shot: Option<usize> = None;
            ui.indent(("shots", i), |ui| {
                for (j, shot) in row.shots.iter_mut().enumerate() {
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::TextEdit::singleline(shot)
                                .hint_text("Shot Name (max 25 chars)")
                                .char_limit(25)
                                .desired_width(160.0),
                        );
                        if ui.small_button("-").clicked() {
                            remove_shot = Some(j);
                        }
                        if ui.small_button("+").clicked() {
                            insert_shot_after = Some(j);
                        }
                    });
                }
            });
            if let Some(j) = remove_shot {
                row.shots.remove(j);
            }
            if let Some(j) = insert_shot_after {
                row.shots.insert(j + 1, String::new());
            }

            ui.separator();
        }

        if let Some(i) = remove_row {
            self.rows.remove(i);
        }
        if let Some(i) = insert_row_after {
            self.rows.insert(i + 1, SequenceRow::default());
        }
        if self.rows.is_empty() && ui.button("Add sequence").clicked() {
            self.rows.push(SequenceRow::default());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_drop_blank_rows_and_sanitize() {
        let list = SequenceList {
            rows: vec![
                SequenceRow { name: " SEQ01 ".into(), shots: vec!["SH010".into(), "".into()] },
                SequenceRow { name: "".into(), shots: vec!["".into()] },
                SequenceRow { name: "".into(), shots: vec!["SH900".into()] },
                SequenceRow { name: "../evil".into(), shots: vec!["a/b".into()] },
            ],
        };
        let entries = list.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].name, "SEQ01");
        assert_eq!(entries[0].shots, vec!["SH010"]);
        assert_eq!(entries[1].name, "");
        assert_eq!(entries[1].shots, vec!["SH900"]);
        assert_eq!(entries[2].name, "evil");
        assert_eq!(entries[2].shots, vec!["ab"]);
    }
}
