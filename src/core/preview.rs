//! Pure plan-to-text projections backing the live preview panes.
//!
//! No filesystem access: the template entry list was captured at browse time
//! and everything else comes straight from the UI state, so the preview can
//! be recomputed every frame.

use chrono::NaiveDate;

use crate::config::FolderConfig;
use crate::core::entities::{CreationMode, SequenceEntry};
use crate::core::plan::AdditionPlan;
use crate::core::template::{TemplateEntry, SEQ_TOKEN, SHOT_TOKEN};

/// Everything the Structure tab preview depends on.
pub struct StructurePreview<'a> {
    pub show_name: &'a str,
    pub destination: &'a str,
    pub mode: CreationMode,
    pub fps_label: &'a str,
    pub width: u32,
    pub height: u32,
    pub use_proxy: bool,
    pub use_aces: bool,
    pub date: NaiveDate,
    pub template_root: &'a str,
    pub template_entries: &'a [TemplateEntry],
    pub cfg: &'a FolderConfig,
    pub seqs: &'a [SequenceEntry],
}

pub fn render_structure_preview(p: &StructurePreview) -> String {
    if p.show_name.trim().is_empty() || p.destination.trim().is_empty() {
        return "No Show Name or Destination => no preview.".to_string();
    }

    let final_name = format!("{}_{}", p.show_name.trim(), p.date.format("%Y-%m-%d"));
    let mut lines = vec![
        format!("Destination => {}/{}", p.destination.trim_end_matches('/'), final_name),
        format!("Mode => {}", p.mode.label()),
        format!("FPS => {}", p.fps_label),
        format!("Resolution => {}x{}", p.width, p.height),
        format!("Use Proxies => {}", p.use_proxy),
        format!("Use ACES => {}", p.use_aces),
    ];

    match p.mode {
        CreationMode::Fixed => {
            lines.push(String::new());
            lines.push("Hardcoded Folder Structure Preview:".to_string());
            lines.extend(fixed_tree_lines(p.cfg, p.seqs));
        }
        CreationMode::Template => {
            if p.template_root.trim().is_empty() {
                lines.push("No Template Folder chosen.".to_string());
            } else {
                lines.push(format!("Template => {}", p.template_root.trim()));
                lines.push("Subfolders (dry-run):".to_string());
                lines.extend(template_lines(p.template_entries, p.seqs));
            }
        }
    }

    lines.join("\n")
}

fn template_lines(entries: &[TemplateEntry], seqs: &[SequenceEntry]) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in entries {
        if entry.comp_role {
            lines.push(format!("  {}", entry.rel_path));
            lines.push("    -> For each sequence/shot => subfolder + project/render + .nk".to_string());
        } else if entry.has_tokens() {
            for seq in seqs {
                for shot in &seq.shots {
                    let sub = entry
                        .rel_path
                        .replace(SEQ_TOKEN, &seq.name)
                        .replace(SHOT_TOKEN, shot);
                    lines.push(format!("  {sub}"));
                }
            }
        } else {
            lines.push(format!("  {}", entry.rel_path));
        }
    }
    lines
}

fn fixed_tree_lines(cfg: &FolderConfig, seqs: &[SequenceEntry]) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("├── {}/", cfg.plates.trim()));
    lines.push(format!("│   ├── {}/", cfg.plates_aspera.trim()));
    let named: Vec<&SequenceEntry> = seqs.iter().filter(|s| !s.name.is_empty()).collect();
    for (i, seq) in named.iter().enumerate() {
        let prefix = if i < named.len() - 1 { "│   ├──" } else { "│   └──" };
        lines.push(format!("{prefix} {}/", seq.name));
        for (j, shot) in seq.shots.iter().enumerate() {
            let prefix = if j < seq.shots.len() - 1 { "│   │   ├──" } else { "│   │   └──" };
            lines.push(format!("{prefix} {shot}/"));
        }
    }
    lines.push(format!("│   └── {}", cfg.plates_manifest.trim()));
    lines.push("│".to_string());

    lines.push(format!("├── {}/", cfg.support.trim()));
    lines.push(format!("│   ├── {}/", cfg.support_luts.trim()));
    lines.push(format!("│   │   ├── {}/", cfg.support_luts_camera.trim()));
    lines.push(format!("│   │   └── {}/", cfg.support_luts_show.trim()));
    lines.push(format!("│   ├── {}/", cfg.support_edl_xml.trim()));
    lines.push(format!("│   ├── {}/", cfg.support_guides.trim()));
    lines.push(format!("│   └── {}/", cfg.support_camera_data.trim()));
    lines.push("│".to_string());

    lines.push(format!("├── {}/", cfg.references.trim()));
    lines.push(format!("│   ├── {}/", cfg.references_client_brief.trim()));
    lines.push(format!("│   ├── {}/", cfg.references_artwork.trim()));
    lines.push(format!("│   └── {}/", cfg.references_style_guides.trim()));
    lines.push("│".to_string());

    lines.push(format!("├── {}/", cfg.vfx.trim()));
    for seq in seqs {
        lines.push(format!("│   └── {}/", seq.name));
        for shot in &seq.shots {
            lines.push(format!("│       └── {shot}/"));
            lines.push("│           ├── project/".to_string());
            lines.push("│           └── render/".to_string());
        }
    }
    lines.push("│".to_string());

    lines.push(format!("├── {}/", cfg.comp.trim()));
    for seq in seqs {
        lines.push(format!("│   └── {}/", seq.name));
        for shot in &seq.shots {
            lines.push(format!("│       └── {shot}/"));
            lines.push("│           ├── project/ (.nk script here)".to_string());
            lines.push("│           └── render/".to_string());
        }
    }
    lines.push("│".to_string());

    lines.push(format!("├── {}/", cfg.mograph.trim()));
    lines.push(format!("│   ├── {}/", cfg.mograph_projects.trim()));
    lines.push(format!("│   └── {}/", cfg.mograph_render.trim()));
    lines.push("│".to_string());

    lines.push(format!("├── {}/", cfg.shared.trim()));
    lines.push(format!("│   ├── {}/", cfg.shared_stock_footage.trim()));
    lines.push(format!("│   ├── {}/", cfg.shared_graphics.trim()));
    lines.push(format!("│   ├── {}/", cfg.shared_fonts.trim()));
    lines.push(format!("│   └── {}/", cfg.shared_templates.trim()));
    lines.push("│".to_string());

    lines.push(format!("└── {}/", cfg.output.trim()));
    lines.push(format!("    └── {}/", cfg.output_date.trim()));
    lines.push(format!("        ├── {}/", cfg.output_full_res.trim()));
    lines.push(format!("        └── {}/", cfg.output_proxy.trim()));
    lines.push(String::new());
    lines.push(format!(
        "Nuke scripts in {}/[sequence]/[shot]/project/[sequence]_[shot]_comp_v001.nk",
        cfg.comp.trim()
    ));

    lines
}

/// Text preview of an addition batch, paths shown relative to the project.
pub fn render_additions_preview(project_root: &std::path::Path, plan: &AdditionPlan) -> String {
    if plan.groups.is_empty() {
        return "Nothing selected => no preview.".to_string();
    }

    let mut lines = Vec::new();
    let mut last_base = None;
    for group in &plan.groups {
        if last_base != Some(&group.base) {
            let rel = group
                .base
                .strip_prefix(project_root)
                .unwrap_or(&group.base)
                .to_string_lossy()
                .replace('\\', "/");
            lines.push(format!("{rel}/"));
            last_base = Some(&group.base);
        }
        let shot_indent = if group.sequence.is_empty() {
            "  "
        } else {
            lines.push(format!("  {}/", group.sequence));
            "    "
        };
        for shot in &group.shots {
            lines.push(format!("{shot_indent}{shot}/"));
            if group.comp_scripts {
                lines.push(format!("{shot_indent}  project/ (.nk script here)"));
                lines.push(format!("{shot_indent}  render/"));
            }
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::plan::addition_plan;
    use std::path::{Path, PathBuf};

    fn seqs() -> Vec<SequenceEntry> {
        vec![SequenceEntry {
            name: "SEQ01".into(),
            shots: vec!["SH010".into()],
        }]
    }

    fn base_preview<'a>(cfg: &'a FolderConfig, seqs: &'a [SequenceEntry]) -> StructurePreview<'a> {
        StructurePreview {
            show_name: "Atlas",
            destination: "/tmp/projects",
            mode: CreationMode::Fixed,
            fps_label: "24",
            width: 1920,
            height: 1080,
            use_proxy: false,
            use_aces: false,
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            template_root: "",
            template_entries: &[],
            cfg,
            seqs,
        }
    }

    #[test]
    fn preview_requires_show_and_destination() {
        let cfg = FolderConfig::default();
        let seqs = seqs();
        let mut p = base_preview(&cfg, &seqs);
        p.show_name = "";
        assert_eq!(render_structure_preview(&p), "No Show Name or Destination => no preview.");
    }

    #[test]
    fn fixed_preview_shows_dated_root_and_tree() {
        let cfg = FolderConfig::default();
        let seqs = seqs();
        let text = render_structure_preview(&base_preview(&cfg, &seqs));
        assert!(text.contains("Destination => /tmp/projects/Atlas_2024-01-15"));
        assert!(text.contains("├── 01_plates/"));
        assert!(text.contains("│   │   └── SH010/"));
        assert!(text.contains("├── 05_comp/"));
    }

    #[test]
    fn template_preview_marks_comp_entries() {
        let cfg = FolderConfig::default();
        let seqs = seqs();
        let entries = vec![
            TemplateEntry { rel_path: "comp".into(), comp_role: true },
            TemplateEntry { rel_path: "[sequence]/[shot]/data".into(), comp_role: false },
        ];
        let mut p = base_preview(&cfg, &seqs);
        p.mode = CreationMode::Template;
        p.template_root = "/templates/showA";
        p.template_entries = &entries;
        let text = render_structure_preview(&p);
        assert!(text.contains("  comp\n    -> For each sequence/shot"));
        assert!(text.contains("  SEQ01/SH010/data"));
    }

    #[test]
    fn additions_preview_lists_targets_and_shots() {
        let plan = addition_plan(Path::new("/proj"), &[PathBuf::from("04_vfx")], &seqs(), true);
        let text = render_additions_preview(Path::new("/proj"), &plan);
        assert!(text.contains("04_vfx/"));
        assert!(text.contains("  SEQ01/"));
        assert!(text.contains("    SH010/"));
        assert!(text.contains("project/ (.nk script here)"));
    }
}
