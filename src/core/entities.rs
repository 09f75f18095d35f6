//! Domain types shared by the planner, templater and UI.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One named sequence with its ordered list of shot names.
///
/// An empty `name` is a valid "no sequence, just shots" entry: the Add tab
/// creates its shots directly under the target folder, and the fixed layout
/// skips it under plates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceEntry {
    pub name: String,
    pub shots: Vec<String>,
}

/// How the show tree is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreationMode {
    Fixed,
    Template,
}

impl CreationMode {
    pub fn label(self) -> &'static str {
        match self {
            CreationMode::Fixed => "Hardcoded",
            CreationMode::Template => "Template",
        }
    }
}

/// Scalar knobs that fully determine one generated comp script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    pub fps: f64,
    pub width: u32,
    pub height: u32,
    pub resolution_label: String,
    pub use_proxy: bool,
    pub use_aces: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            fps: 24.0,
            width: 1920,
            height: 1080,
            resolution_label: "HD_1080".into(),
            use_proxy: false,
            use_aces: false,
        }
    }
}

/// Strip path separators and traversal segments from a user-entered name.
///
/// Show, sequence and shot names must stay single path components so every
/// created path lands inside the intended root.
pub fn sanitize_name(raw: &str) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '/' | '\\' | ':'))
        .collect();
    cleaned.trim_start_matches('.').trim().to_string()
}

/// Date-stamped show root: `<dest>/<show>_<YYYY-MM-DD>`.
///
/// The date is injected by the caller so the derived path is computed once at
/// creation time and stays testable.
pub fn show_root(dest: &Path, show_name: &str, date: NaiveDate) -> PathBuf {
    dest.join(format!(
        "{}_{}",
        sanitize_name(show_name),
        date.format("%Y-%m-%d")
    ))
}

/// Filename of the generated comp script for one shot.
///
/// Sequence-less shots drop the leading `<sequence>_` part.
pub fn comp_script_name(sequence: &str, shot: &str) -> String {
    if sequence.is_empty() {
        format!("{shot}_comp_v001.nk")
    } else {
        format!("{sequence}_{shot}_comp_v001.nk")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_separators_and_traversal() {
        assert_eq!(sanitize_name("  SEQ01 "), "SEQ01");
        assert_eq!(sanitize_name("a/b"), "ab");
        assert_eq!(sanitize_name("a\\b"), "ab");
        assert_eq!(sanitize_name(".."), "");
        assert_eq!(sanitize_name("../../etc"), "etc");
        assert_eq!(sanitize_name("."), "");
    }

    #[test]
    fn show_root_embeds_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let root = show_root(Path::new("/tmp/projects"), "Atlas", date);
        assert_eq!(root, PathBuf::from("/tmp/projects/Atlas_2024-01-15"));
    }

    #[test]
    fn script_name_with_and_without_sequence() {
        assert_eq!(comp_script_name("SEQ01", "SH010"), "SEQ01_SH010_comp_v001.nk");
        assert_eq!(comp_script_name("", "SH010"), "SH010_comp_v001.nk");
    }
}
