//! Checkable directory tree of an existing project.

use anyhow::{Context, Result};
use eframe::egui;
use std::path::{Path, PathBuf};

/// One directory of the scanned project tree.
#[derive(Debug, Clone, Default)]
pub struct DirNode {
    pub name: String,
    /// Path relative to the scanned project root.
    pub rel: PathBuf,
    pub checked: bool,
    pub children: Vec<DirNode>,
}

/// Scan the project root into a checkable tree (directories only).
pub fn scan_dir_tree(root: &Path) -> Result<Vec<DirNode>> {
    read_children(root, Path::new(""))
}

fn read_children(abs: &Path, rel: &Path) -> Result<Vec<DirNode>> {
    let mut nodes = Vec::new();
    let entries = std::fs::read_dir(abs)
        .with_context(|| format!("Failed to read directory {}", abs.display()))?;
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read directory {}", abs.display()))?;
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if !is_dir {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let child_rel = rel.join(&name);
        let children = read_children(&entry.path(), &child_rel)?;
        nodes.push(DirNode { name, rel: child_rel, checked: false, children });
    }
    nodes.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(nodes)
}

/// Render the tree with one checkbox per folder. Returns true when any
/// checkbox changed.
pub fn ui_tree(ui: &mut egui::Ui, nodes: &mut [DirNode]) -> bool {
    let mut changed = false;
    for node in nodes {
        changed |= ui.checkbox(&mut node.checked, &node.name).changed();
        if !node.children.is_empty() {
            ui.indent(&node.rel, |ui| {
                changed |= ui_tree(ui, &mut node.children);
            });
        }
    }
    changed
}

/// Relative paths of all checked folders, depth-first.
pub fn checked_paths(nodes: &[DirNode]) -> Vec<PathBuf> {
    let mut out = Vec::new();
    collect_checked(nodes, &mut out);
    out
}

fn collect_checked(nodes: &[DirNode], out: &mut Vec<PathBuf>) {
    for node in nodes {
        if node.checked {
            out.push(node.rel.clone());
        }
        collect_checked(&node.children, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn scan_builds_nested_sorted_tree() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("b/inner")).unwrap();
        fs::create_dir_all(tmp.path().join("a")).unwrap();
        fs::write(tmp.path().join("file.txt"), "x").unwrap();

        let tree = scan_dir_tree(tmp.path()).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].name, "a");
        assert_eq!(tree[1].name, "b");
        assert_eq!(tree[1].children[0].rel, PathBuf::from("b/inner"));
    }

    #[test]
    fn checked_paths_collects_at_any_depth() {
        let mut tree = vec![DirNode {
            name: "b".into(),
            rel: "b".into(),
            checked: false,
            children: vec![DirNode {
                name: "inner".into(),
                rel: "b/inner".into(),
                checked: true,
                children: vec![],
            }],
        }];
        assert_eq!(checked_paths(&tree), vec![PathBuf::from("b/inner")]);
        tree[0].checked = true;
        assert_eq!(
            checked_paths(&tree),
            vec![PathBuf::from("b"), PathBuf::from("b/inner")]
        );
    }
}
