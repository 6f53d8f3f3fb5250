//! Scan a migrated buffer for legacy shapes the plan did not rewrite.
//!
//! Anything reported here needs a manual edit: the substitutions only
//! recognise the formatting the known components use.

use regex::Regex;
use serde::Serialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeftoverKind {
    LegacyImport,
    LegacyHook,
    RawDispatch,
    StateRead,
}

impl LeftoverKind {
    fn pattern(&self) -> &'static str {
        match self {
            LeftoverKind::LegacyImport => r"from\s+'\.\./context/AppContext'",
            LeftoverKind::LegacyHook => r"\buseApp\(\)",
            LeftoverKind::RawDispatch => r"\bdispatch\(\{\s*type:\s*'[A-Z0-9_]+'",
            LeftoverKind::StateRead => r"\bstate\.[A-Za-z_]\w*",
        }
    }

    const ALL: [LeftoverKind; 4] = [
        LeftoverKind::LegacyImport,
        LeftoverKind::LegacyHook,
        LeftoverKind::RawDispatch,
        LeftoverKind::StateRead,
    ];
}

/// One legacy shape still present after migration.
#[derive(Debug, Clone, Serialize)]
pub struct Leftover {
    pub kind: LeftoverKind,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    pub matched: String,
}

pub fn scan(text: &str) -> Result<Vec<Leftover>> {
    let matchers = LeftoverKind::ALL
        .iter()
        .map(|kind| {
            Regex::new(kind.pattern())
                .map(|re| (*kind, re))
                .map_err(|e| Error::migrate_invalid_pattern("leftover scan", kind.pattern(), e))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut leftovers = Vec::new();
    for (line_num, line) in text.lines().enumerate() {
        for (kind, re) in &matchers {
            for m in re.find_iter(line) {
                leftovers.push(Leftover {
                    kind: *kind,
                    line: line_num + 1,
                    column: line[..m.start()].chars().count() + 1,
                    matched: m.as_str().to_string(),
                });
            }
        }
    }

    Ok(leftovers)
}
