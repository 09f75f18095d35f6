//! One-shot capture of a template directory tree.
//!
//! Captured once when the user browses to a template folder; the resulting
//! entry list is immutable until the next browse.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use walkdir::WalkDir;

/// Placeholder tokens substituted per sequence/shot at plan-expansion time.
pub const SEQ_TOKEN: &str = "[sequence]";
pub const SHOT_TOKEN: &str = "[shot]";

/// One directory of the template, relative to the template root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    /// Relative path, '/'-separated, may contain `[sequence]`/`[shot]` tokens.
    pub rel_path: String,
    /// Treat this folder as the comp root: expand per sequence/shot with
    /// project/render children and one comp script each. Defaulted from the
    /// folder name, confirmed by the user in the UI.
    pub comp_role: bool,
}

impl TemplateEntry {
    pub fn new(rel_path: String) -> Self {
        let comp_role = default_comp_role(&rel_path);
        Self { rel_path, comp_role }
    }

    pub fn has_tokens(&self) -> bool {
        self.rel_path.contains(SEQ_TOKEN) || self.rel_path.contains(SHOT_TOKEN)
    }
}

/// Heuristic default: final path segment starts with "comp" (case-insensitive).
fn default_comp_role(rel_path: &str) -> bool {
    rel_path
        .rsplit('/')
        .next()
        .map(|seg| seg.to_lowercase().starts_with("comp"))
        .unwrap_or(false)
}

/// Walk `root` once and collect every subdirectory as a template entry.
pub fn scan_template(root: &Path) -> Result<Vec<TemplateEntry>> {
    let mut entries = Vec::new();
    for item in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let item =
            item.with_context(|| format!("Failed to walk template folder {}", root.display()))?;
        if !item.file_type().is_dir() {
            continue;
        }
        let Ok(rel) = item.path().strip_prefix(root) else {
            continue;
        };
        let rel_path = rel.to_string_lossy().replace('\\', "/");
        entries.push(TemplateEntry::new(rel_path));
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn comp_role_defaults_from_final_segment() {
        assert!(TemplateEntry::new("05_comp".into()).comp_role);
        assert!(TemplateEntry::new("work/Compositing".into()).comp_role);
        assert!(!TemplateEntry::new("comp_stuff/plates".into()).comp_role);
        assert!(!TemplateEntry::new("04_vfx".into()).comp_role);
    }

    #[test]
    fn token_detection() {
        assert!(TemplateEntry::new("[sequence]/[shot]/data".into()).has_tokens());
        assert!(!TemplateEntry::new("editorial/edl".into()).has_tokens());
    }

    #[test]
    fn scan_collects_relative_dirs_only() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("01_plates/raw")).unwrap();
        fs::create_dir_all(tmp.path().join("comp")).unwrap();
        fs::write(tmp.path().join("01_plates/readme.txt"), "x").unwrap();

        let entries = scan_template(tmp.path()).unwrap();
        let rels: Vec<&str> = entries.iter().map(|e| e.rel_path.as_str()).collect();
        assert_eq!(rels, vec!["01_plates", "01_plates/raw", "comp"]);
        assert!(entries[2].comp_role);
        assert!(!entries[0].comp_role);
    }
}
