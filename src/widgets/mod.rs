//! Reusable UI widgets.

pub mod fs_tree;
pub mod render_opts;
pub mod seq_list;
