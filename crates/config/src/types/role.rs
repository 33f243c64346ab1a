//! Role definition types.
//!
//! A role names the index pattern a search targets and the timestamp field
//! used to window and sort results.

use serde::{Deserialize, Serialize};

/// A named search role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    /// Index pattern, e.g. `logs-*`.
    pub index: String,
    /// Date field used for the time window, e.g. `@timestamp`.
    pub window_filter: String,
}
