//! Structure planner: pure mapping from inputs to directory and file
//! operations. No I/O happens here; `core::apply` executes the plan.

use std::path::{Path, PathBuf};

use crate::config::FolderConfig;
use crate::core::entities::{comp_script_name, SequenceEntry};
use crate::core::template::{TemplateEntry, SEQ_TOKEN, SHOT_TOKEN};

pub const MANIFEST_PLACEHOLDER: &str = "Plate manifest placeholder\n";

/// Content policy for one planned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileKind {
    /// Placeholder manifest, written only if absent.
    Manifest,
    /// Generated comp script, always (re)written.
    CompScript { sequence: String, shot: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub kind: FileKind,
}

/// Ordered set of directories to ensure-exist plus file writes. Directory
/// creation is idempotent; ordering only matters in that every file's parent
/// directory appears in `dirs` before the file is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructurePlan {
    pub dirs: Vec<PathBuf>,
    pub files: Vec<PlannedFile>,
}

impl StructurePlan {
    /// Per-shot project/render pair under `<base>/<sequence>/<shot>`,
    /// optionally queueing one comp script per shot.
    fn add_shot_tree(&mut self, base: &Path, seqs: &[SequenceEntry], with_scripts: bool) {
        for seq in seqs {
            let seq_dir = join_component(base, &seq.name);
            if !seq.name.is_empty() {
                self.dirs.push(seq_dir.clone());
            }
            for shot in &seq.shots {
                let shot_dir = seq_dir.join(shot);
                let project = shot_dir.join("project");
                self.dirs.push(project.clone());
                self.dirs.push(shot_dir.join("render"));
                if with_scripts {
                    self.files.push(PlannedFile {
                        path: project.join(comp_script_name(&seq.name, shot)),
                        kind: FileKind::CompScript {
                            sequence: seq.name.clone(),
                            shot: shot.clone(),
                        },
                    });
                }
            }
        }
    }
}

/// Skip empty components so "no sequence" entries collapse onto the base.
fn join_component(base: &Path, component: &str) -> PathBuf {
    if component.is_empty() {
        base.to_path_buf()
    } else {
        base.join(component)
    }
}

/// Join a '/'-separated relative path onto `root`, dropping empty segments.
fn join_rel(root: &Path, rel: &str) -> PathBuf {
    rel.split('/')
        .filter(|seg| !seg.is_empty())
        .fold(root.to_path_buf(), |p, seg| p.join(seg))
}

/// Fixed-layout plan: eight numbered roots with the nested structure from the
/// studio convention, folder names resolved from `cfg`.
pub fn fixed_plan(show_root: &Path, cfg: &FolderConfig, seqs: &[SequenceEntry]) -> StructurePlan {
    let mut plan = StructurePlan::default();
    plan.dirs.push(show_root.to_path_buf());

    let plates = show_root.join(cfg.plates.trim());
    let support = show_root.join(cfg.support.trim());
    let references = show_root.join(cfg.references.trim());
    let vfx = show_root.join(cfg.vfx.trim());
    let comp = show_root.join(cfg.comp.trim());
    let mograph = show_root.join(cfg.mograph.trim());
    let shared = show_root.join(cfg.shared.trim());
    let output = show_root.join(cfg.output.trim());
    for root in [
        &plates, &support, &references, &vfx, &comp, &mograph, &shared, &output,
    ] {
        plan.dirs.push(root.clone());
    }

    // 01_plates: ingest area, manifest placeholder, bare per-shot dirs.
    // Sequence-less entries get no plates folders at all.
    plan.dirs.push(plates.join(cfg.plates_aspera.trim()));
    plan.files.push(PlannedFile {
        path: plates.join(cfg.plates_manifest.trim()),
        kind: FileKind::Manifest,
    });
    for seq in seqs.iter().filter(|s| !s.name.is_empty()) {
        let seq_dir = plates.join(&seq.name);
        plan.dirs.push(seq_dir.clone());
        for shot in &seq.shots {
            plan.dirs.push(seq_dir.join(shot));
        }
    }

    // 02_support
    let luts = support.join(cfg.support_luts.trim());
    plan.dirs.push(luts.join(cfg.support_luts_camera.trim()));
    plan.dirs.push(luts.join(cfg.support_luts_show.trim()));
    plan.dirs.push(support.join(cfg.support_edl_xml.trim()));
    plan.dirs.push(support.join(cfg.support_guides.trim()));
    plan.dirs.push(support.join(cfg.support_camera_data.trim()));

    // 03_references
    plan.dirs.push(references.join(cfg.references_client_brief.trim()));
    plan.dirs.push(references.join(cfg.references_artwork.trim()));
    plan.dirs.push(references.join(cfg.references_style_guides.trim()));

    // 04_vfx and 05_comp: project/render per shot; comp also gets scripts.
    plan.add_shot_tree(&vfx, seqs, false);
    plan.add_shot_tree(&comp, seqs, true);

    // 06_mograph
    plan.dirs.push(mograph.join(cfg.mograph_projects.trim()));
    plan.dirs.push(mograph.join(cfg.mograph_render.trim()));

    // 07_shared
    plan.dirs.push(shared.join(cfg.shared_stock_footage.trim()));
    plan.dirs.push(shared.join(cfg.shared_graphics.trim()));
    plan.dirs.push(shared.join(cfg.shared_fonts.trim()));
    plan.dirs.push(shared.join(cfg.shared_templates.trim()));

    // 08_output
    let out_date = output.join(cfg.output_date.trim());
    plan.dirs.push(out_date.join(cfg.output_full_res.trim()));
    plan.dirs.push(out_date.join(cfg.output_proxy.trim()));

    plan
}

/// Template-derived plan: replicate the captured entries under `show_root`.
///
/// Token-bearing entries expand once per (sequence, shot) pair by literal
/// substitution; comp-role entries additionally get the per-shot
/// project/render/script triple underneath.
pub fn template_plan(
    show_root: &Path,
    entries: &[TemplateEntry],
    seqs: &[SequenceEntry],
) -> StructurePlan {
    let mut plan = StructurePlan::default();
    plan.dirs.push(show_root.to_path_buf());

    for entry in entries {
        if entry.comp_role {
            let comp_root = join_rel(show_root, &entry.rel_path);
            plan.dirs.push(comp_root.clone());
            plan.add_shot_tree(&comp_root, seqs, true);
        } else if entry.has_tokens() {
            for seq in seqs {
                for shot in &seq.shots {
                    let sub = entry
                        .rel_path
                        .replace(SEQ_TOKEN, &seq.name)
                        .replace(SHOT_TOKEN, shot);
                    plan.dirs.push(join_rel(show_root, &sub));
                }
            }
        } else {
            plan.dirs.push(join_rel(show_root, &entry.rel_path));
        }
    }

    plan
}

/// One skippable unit of the "add to existing project" batch: a target
/// directory plus one sequence entry. Collision checks happen at apply time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdditionGroup {
    /// Absolute path of the checked target directory.
    pub base: PathBuf,
    /// May be empty: shots then land directly under `base`.
    pub sequence: String,
    pub shots: Vec<String>,
    /// Also create project/render children plus one comp script per shot.
    pub comp_scripts: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdditionPlan {
    pub groups: Vec<AdditionGroup>,
}

/// Plan for appending sequence/shot subtrees to user-checked directories of
/// an existing project.
pub fn addition_plan(
    project_root: &Path,
    targets: &[PathBuf],
    seqs: &[SequenceEntry],
    comp_scripts: bool,
) -> AdditionPlan {
    let mut plan = AdditionPlan::default();
    for target in targets {
        let base = project_root.join(target);
        for seq in seqs {
            plan.groups.push(AdditionGroup {
                base: base.clone(),
                sequence: seq.name.clone(),
                shots: seq.shots.clone(),
                comp_scripts,
            });
        }
    }
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn seqs() -> Vec<SequenceEntry> {
        vec![SequenceEntry {
            name: "SEQ01".into(),
            shots: vec!["SH010".into(), "SH020".into()],
        }]
    }

    fn rel_set(plan: &StructurePlan, root: &Path) -> BTreeSet<String> {
        plan.dirs
            .iter()
            .filter_map(|d| d.strip_prefix(root).ok())
            .map(|d| d.to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn fixed_plan_builds_vfx_and_comp_shot_dirs() {
        let root = Path::new("/show/Atlas_2024-01-15");
        let plan = fixed_plan(root, &FolderConfig::default(), &seqs());
        let rels = rel_set(&plan, root);

        for base in ["04_vfx", "05_comp"] {
            for shot in ["SH010", "SH020"] {
                assert!(rels.contains(&format!("{base}/SEQ01/{shot}/project")), "{base}/{shot}");
                assert!(rels.contains(&format!("{base}/SEQ01/{shot}/render")));
            }
        }
        // No other children under the shot dirs.
        let under_shot: Vec<_> = rels
            .iter()
            .filter(|r| r.starts_with("05_comp/SEQ01/SH010/"))
            .collect();
        assert_eq!(under_shot.len(), 2);
    }

    #[test]
    fn fixed_plan_queues_comp_scripts_only_under_comp() {
        let root = Path::new("/show/x");
        let plan = fixed_plan(root, &FolderConfig::default(), &seqs());
        let scripts: Vec<_> = plan
            .files
            .iter()
            .filter(|f| matches!(f.kind, FileKind::CompScript { .. }))
            .collect();
        assert_eq!(scripts.len(), 2);
        assert_eq!(
            scripts[0].path,
            root.join("05_comp/SEQ01/SH010/project/SEQ01_SH010_comp_v001.nk")
        );
        assert!(plan
            .files
            .iter()
            .any(|f| f.kind == FileKind::Manifest && f.path == root.join("01_plates/plate_manifest.txt")));
    }

    #[test]
    fn fixed_plan_skips_empty_sequence_under_plates() {
        let root = Path::new("/show/x");
        let entries = vec![SequenceEntry {
            name: String::new(),
            shots: vec!["SH010".into()],
        }];
        let plan = fixed_plan(root, &FolderConfig::default(), &entries);
        let rels = rel_set(&plan, root);
        assert!(!rels.contains("01_plates/SH010"));
        // Shots of a sequence-less entry land directly under vfx/comp.
        assert!(rels.contains("04_vfx/SH010/project"));
        assert!(rels.contains("05_comp/SH010/render"));
    }

    #[test]
    fn fixed_plan_respects_folder_overrides() {
        let root = Path::new("/show/x");
        let mut cfg = FolderConfig::default();
        cfg.comp = "050_compositing".into();
        let plan = fixed_plan(root, &cfg, &seqs());
        let rels = rel_set(&plan, root);
        assert!(rels.contains("050_compositing/SEQ01/SH010/project"));
        assert!(!rels.iter().any(|r| r.starts_with("05_comp")));
    }

    #[test]
    fn template_tokens_expand_per_pair() {
        let root = Path::new("/show/x");
        let entries = vec![TemplateEntry {
            rel_path: "[sequence]/[shot]/data".into(),
            comp_role: false,
        }];
        let plan = template_plan(root, &entries, &seqs());
        let rels = rel_set(&plan, root);
        let expanded: BTreeSet<_> = rels.iter().filter(|r| r.contains("data")).cloned().collect();
        assert_eq!(
            expanded,
            BTreeSet::from(["SEQ01/SH010/data".to_string(), "SEQ01/SH020/data".to_string()])
        );
    }

    #[test]
    fn template_plain_entry_created_once() {
        let root = Path::new("/show/x");
        let entries = vec![TemplateEntry {
            rel_path: "editorial/edl".into(),
            comp_role: false,
        }];
        let plan = template_plan(root, &entries, &seqs());
        assert_eq!(
            plan.dirs
                .iter()
                .filter(|d| d.ends_with("editorial/edl"))
                .count(),
            1
        );
        assert!(plan.files.is_empty());
    }

    #[test]
    fn template_comp_entry_gets_shot_triples_and_scripts() {
        let root = Path::new("/show/x");
        let entries = vec![TemplateEntry {
            rel_path: "work/comp".into(),
            comp_role: true,
        }];
        let plan = template_plan(root, &entries, &seqs());
        let rels = rel_set(&plan, root);
        assert!(rels.contains("work/comp/SEQ01/SH010/project"));
        assert!(rels.contains("work/comp/SEQ01/SH020/render"));
        assert_eq!(plan.files.len(), 2);
        assert_eq!(
            plan.files[1].path,
            root.join("work/comp/SEQ01/SH020/project/SEQ01_SH020_comp_v001.nk")
        );
    }

    #[test]
    fn addition_plan_crosses_targets_with_sequences() {
        let plan = addition_plan(
            Path::new("/proj"),
            &[PathBuf::from("04_vfx"), PathBuf::from("05_comp")],
            &seqs(),
            true,
        );
        assert_eq!(plan.groups.len(), 2);
        assert_eq!(plan.groups[0].base, PathBuf::from("/proj/04_vfx"));
        assert_eq!(plan.groups[1].base, PathBuf::from("/proj/05_comp"));
        assert!(plan.groups.iter().all(|g| g.comp_scripts));
    }
}
