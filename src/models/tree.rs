//! Directory listing rows.
//!
//! - `TreeRow`: one display row of the reconstructed parent directory.
//!   Only a single level of nesting is modeled: a name such as `a/b/c` becomes
//!   the group `a` with the child `b/c`.

use std::fmt;

/// Glyph drawn before a child entry on its continuation line.
pub const BRANCH_GLYPH: &str = "└──";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeRow {
    Plain { name: String },
    GroupWithChild { group: String, child: String },
}

impl TreeRow {
    pub fn is_group(&self) -> bool {
        matches!(self, TreeRow::GroupWithChild { .. })
    }
}

impl fmt::Display for TreeRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeRow::Plain { name } => write!(f, "{}", name),
            TreeRow::GroupWithChild { group, child } => {
                write!(f, "{}\n  {} {}", group, BRANCH_GLYPH, child)
            }
        }
    }
}
