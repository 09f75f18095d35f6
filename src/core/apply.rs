//! Applies planned operations to the filesystem.
//!
//! One-shot, non-transactional batch: directory creation is idempotent,
//! manifest placeholders are write-if-absent, comp scripts are last-write-
//! wins. Addition collisions are skip-and-continue; unexpected fs failures
//! propagate with path context and end the batch without rollback.

use anyhow::{Context, Result};
use log::{info, warn};
use std::fs;
use std::path::Path;

use crate::core::entities::{comp_script_name, RenderSettings};
use crate::core::nuke;
use crate::core::plan::{AdditionPlan, FileKind, StructurePlan, MANIFEST_PLACEHOLDER};

/// Outcome of one batch, including non-fatal per-item collision warnings.
#[derive(Debug, Clone, Default)]
pub struct ApplyReport {
    pub dirs_created: usize,
    pub files_written: usize,
    pub collisions: Vec<String>,
}

fn ensure_dir(path: &Path, report: &mut ApplyReport) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
        report.dirs_created += 1;
    }
    Ok(())
}

fn write_file(path: &Path, text: &str, report: &mut ApplyReport) -> Result<()> {
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    report.files_written += 1;
    Ok(())
}

/// Execute a structure plan: every directory ensure-exists, then the file
/// writes (planned dirs cover every file's parent).
pub fn apply_plan(plan: &StructurePlan, render: &RenderSettings) -> Result<ApplyReport> {
    let mut report = ApplyReport::default();

    for dir in &plan.dirs {
        ensure_dir(dir, &mut report)?;
    }

    for file in &plan.files {
        match &file.kind {
            FileKind::Manifest => {
                if !file.path.exists() {
                    write_file(&file.path, MANIFEST_PLACEHOLDER, &mut report)?;
                }
            }
            FileKind::CompScript { sequence, shot } => {
                let text = nuke::render_script(sequence, shot, render);
                write_file(&file.path, &text, &mut report)?;
            }
        }
    }

    info!(
        "Applied plan: {} new dirs, {} files written",
        report.dirs_created, report.files_written
    );
    Ok(report)
}

/// Execute an addition plan against an existing project. A pre-existing
/// sequence directory skips that whole sequence; a pre-existing shot
/// directory skips that shot. Siblings keep going.
pub fn apply_additions(plan: &AdditionPlan, render: &RenderSettings) -> Result<ApplyReport> {
    let mut report = ApplyReport::default();

    for group in &plan.groups {
        if group.sequence.is_empty() {
            for shot in &group.shots {
                add_shot(&group.base, "", shot, group.comp_scripts, render, &mut report)?;
            }
            continue;
        }

        let seq_dir = group.base.join(&group.sequence);
        if seq_dir.exists() {
            let msg = format!(
                "Sequence '{}' already exists under {}, skipping",
                group.sequence,
                group.base.display()
            );
            warn!("{}", msg);
            report.collisions.push(msg);
            continue;
        }
        ensure_dir(&seq_dir, &mut report)?;

        for shot in &group.shots {
            add_shot(&seq_dir, &group.sequence, shot, group.comp_scripts, render, &mut report)?;
        }
    }

    info!(
        "Additions applied: {} new dirs, {} files written, {} collisions",
        report.dirs_created,
        report.files_written,
        report.collisions.len()
    );
    Ok(report)
}

fn add_shot(
    base: &Path,
    sequence: &str,
    shot: &str,
    comp_scripts: bool,
    render: &RenderSettings,
    report: &mut ApplyReport,
) -> Result<()> {
    let shot_dir = base.join(shot);
    if shot_dir.exists() {
        let msg = format!(
            "Shot '{}' already exists under {}, skipping",
            shot,
            base.display()
        );
        warn!("{}", msg);
        report.collisions.push(msg);
        return Ok(());
    }
    ensure_dir(&shot_dir, report)?;

    if comp_scripts {
        let project = shot_dir.join("project");
        ensure_dir(&project, report)?;
        ensure_dir(&shot_dir.join("render"), report)?;
        let text = nuke::render_script(sequence, shot, render);
        write_file(&project.join(comp_script_name(sequence, shot)), &text, report)?;
    }
    Ok(())
}
