use std::fmt;

use serde::{Deserialize, Serialize};

/// Role a column plays in the per-90 transformation.
///
/// Roles are mutually exclusive; every input column gets exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnRole {
    /// Describes the player or context; retained verbatim.
    Identifier,
    /// Minutes played; retained verbatim and used as divisor.
    Denominator,
    /// Market value; retained verbatim and moved to the last position.
    Target,
    /// Counted in-game event; normalized and then dropped.
    Stat,
    /// Non-numeric column outside the identifier set; retained verbatim.
    Passthrough,
}

impl ColumnRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Denominator => "denominator",
            Self::Target => "target",
            Self::Stat => "stat",
            Self::Passthrough => "passthrough",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
