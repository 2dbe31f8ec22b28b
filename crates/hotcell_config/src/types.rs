//! Strongly-typed configuration structures.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level `hotcell.toml` configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfig {
    /// The cell being bound.
    pub cell: CellSection,

    /// Where source artifacts are resolved from.
    pub resolver: ResolverSection,
}

/// The `[cell]` section: which artifact to bind and how to share it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellSection {
    /// The identifier the cell binds to.
    pub identifier: String,

    /// Whether the host wraps the cell for concurrent access
    /// (`SharedCell`). Off by default: the baseline cell is
    /// single-threaded.
    #[serde(default)]
    pub synchronized: bool,
}

/// The `[resolver]` section: filesystem root for artifact lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverSection {
    /// Root directory identifiers are resolved under.
    pub root: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synchronized_defaults_to_false() {
        let config: HostConfig = toml::from_str(
            r#"
[cell]
identifier = "rules/pricing.expr"

[resolver]
root = "scripts"
"#,
        )
        .unwrap();
        assert!(!config.cell.synchronized);
    }

    #[test]
    fn serialize_roundtrip() {
        let config = HostConfig {
            cell: CellSection {
                identifier: "rule.expr".to_string(),
                synchronized: true,
            },
            resolver: ResolverSection {
                root: PathBuf::from("scripts"),
            },
        };
        let text = toml::to_string(&config).unwrap();
        let back: HostConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.cell.identifier, "rule.expr");
        assert!(back.cell.synchronized);
        assert_eq!(back.resolver.root, PathBuf::from("scripts"));
    }
}
