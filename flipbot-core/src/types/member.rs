//! Workspace roster member.

use serde::{Deserialize, Serialize};

/// One entry of the workspace roster: platform user id and display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
}
