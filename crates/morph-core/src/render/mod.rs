//! Display text for a [`Segmentation`](crate::analyzer::Segmentation).
//!
//! Both renderers are pure functions of the segmentation.

mod pad;
mod report;
mod tree;

pub use report::{format_report, NO_AFFIX_NOTICE};
pub use tree::{render_tree, TREE_TITLE};
