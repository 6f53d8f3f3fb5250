//! Single substitution steps and their application to a text buffer.

use regex::Regex;
use crate::error::{Error, Result};

/// One ordered substitution in a migration plan.
#[derive(Debug, Clone)]
pub enum Rewrite {
    /// Exact substring, every occurrence.
    Literal {
        label: String,
        from: String,
        to: String,
    },
    /// Regex, every non-overlapping match. `$1` / `${1}` in the replacement
    /// expand to capture groups.
    Pattern {
        label: String,
        pattern: String,
        replacement: String,
    },
}

impl Rewrite {
    pub fn literal(label: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Rewrite::Literal {
            label: label.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn pattern(
        label: impl Into<String>,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Rewrite::Pattern {
            label: label.into(),
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Rewrite::Literal { label, .. } | Rewrite::Pattern { label, .. } => label,
        }
    }

    /// Same rewrite with every `\n` it inserts written as `eol`.
    /// The match side is left alone.
    pub fn with_line_ending(&self, eol: &str) -> Rewrite {
        match self {
            Rewrite::Literal { label, from, to } => Rewrite::Literal {
                label: label.clone(),
                from: from.clone(),
                to: to.replace('\n', eol),
            },
            Rewrite::Pattern {
                label,
                pattern,
                replacement,
            } => Rewrite::Pattern {
                label: label.clone(),
                pattern: pattern.clone(),
                replacement: replacement.replace('\n', eol),
            },
        }
    }

    pub fn compile(&self) -> Result<CompiledRewrite> {
        let matcher = match self {
            Rewrite::Literal { from, to, .. } => Matcher::Literal {
                from: from.clone(),
                to: to.clone(),
            },
            Rewrite::Pattern {
                label,
                pattern,
                replacement,
            } => {
                let regex = Regex::new(pattern)
                    .map_err(|e| Error::migrate_invalid_pattern(label.clone(), pattern.clone(), e))?;
                Matcher::Regex {
                    regex,
                    replacement: replacement.clone(),
                }
            }
        };

        Ok(CompiledRewrite {
            label: self.label().to_string(),
            matcher,
        })
    }
}

#[derive(Debug)]
enum Matcher {
    Literal { from: String, to: String },
    Regex { regex: Regex, replacement: String },
}

/// A rewrite ready to run against a buffer.
#[derive(Debug)]
pub struct CompiledRewrite {
    label: String,
    matcher: Matcher,
}

impl CompiledRewrite {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Rewrite `text` in place, returning how many replacements were made.
    pub fn apply(&self, text: &mut String) -> usize {
        match &self.matcher {
            Matcher::Literal { from, to } => {
                if from.is_empty() {
                    return 0;
                }
                let count = text.matches(from.as_str()).count();
                if count > 0 {
                    *text = text.replace(from.as_str(), to);
                }
                count
            }
            Matcher::Regex { regex, replacement } => {
                if !regex.is_match(text) {
                    return 0;
                }
                let count = regex.find_iter(text).count();
                *text = regex.replace_all(text, replacement.as_str()).into_owned();
                count
            }
        }
    }
}
