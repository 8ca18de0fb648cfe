//! Route template compilation.
//!
//! # Responsibilities
//! - Translate a `{name}` template into an anchored regex
//! - Remember placeholder names in the order they appear
//! - Extract captured values from a matching path
//!
//! # Design Decisions
//! - Compiled once at registration, never recompiled
//! - Literal text is escaped, so `/a.b` only matches `/a.b`
//! - Placeholders are positional non-greedy groups (`.+?`); names live beside
//!   the regex so duplicate names are legal and resolve to the last capture
//! - Root `/` is a fixed string, never decomposed

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// Detects `{name}` placeholders. A brace inside the braces ends the match
/// early, which leaves the stray brace in literal text where it is rejected.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]*)\}").expect("placeholder regex is valid"));

/// Upper bound for a compiled template regex.
const MAX_PATTERN_REGEX_SIZE: usize = 1 << 20;

const ROOT: &str = "/";

/// Errors produced while compiling a route template.
#[derive(Debug, Error)]
pub enum PatternError {
    /// A `{` or `}` that does not belong to a placeholder.
    #[error("unbalanced brace at byte {position}")]
    UnbalancedBrace { position: usize },

    /// A placeholder with no name, `{}`.
    #[error("empty placeholder at byte {position}")]
    EmptyPlaceholder { position: usize },

    /// The generated regex was rejected.
    #[error("regex compilation failed: {0}")]
    Regex(#[from] regex::Error),
}

/// A compiled route template.
#[derive(Debug, Clone)]
pub struct PathPattern {
    template: String,
    regex: Regex,
    names: Vec<String>,
}

impl PathPattern {
    /// Compile `template` into a matcher anchored at both ends.
    pub fn compile(template: &str) -> Result<Self, PatternError> {
        let trimmed = template.trim_end_matches('/');
        let (source, names) = if trimmed.is_empty() {
            (format!("^{}$", regex::escape(ROOT)), Vec::new())
        } else {
            translate(trimmed)?
        };

        let regex = RegexBuilder::new(&source)
            .size_limit(MAX_PATTERN_REGEX_SIZE)
            .build()?;

        Ok(Self {
            template: template.to_string(),
            regex,
            names,
        })
    }

    /// The template as registered.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The generated regex source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Placeholder names in order of appearance.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Returns `(name, value)` pairs in placeholder order, or `None` when the
    /// path does not match.
    pub fn captures(&self, path: &str) -> Option<Vec<(String, String)>> {
        let caps = self.regex.captures(path)?;
        let pairs = self
            .names
            .iter()
            .enumerate()
            .filter_map(|(i, name)| {
                caps.get(i + 1)
                    .map(|m| (name.clone(), m.as_str().to_string()))
            })
            .collect();
        Some(pairs)
    }
}

/// Builds the anchored regex source for a non-root template.
fn translate(template: &str) -> Result<(String, Vec<String>), PatternError> {
    let mut source = String::with_capacity(template.len() + 8);
    let mut names = Vec::new();
    let mut last = 0;

    source.push('^');
    for caps in PLACEHOLDER.captures_iter(template) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        push_literal(&mut source, template, last, whole.start())?;
        if name.as_str().is_empty() {
            return Err(PatternError::EmptyPlaceholder {
                position: whole.start(),
            });
        }
        source.push_str("(.+?)");
        names.push(name.as_str().to_string());
        last = whole.end();
    }
    push_literal(&mut source, template, last, template.len())?;
    source.push('$');

    Ok((source, names))
}

fn push_literal(
    source: &mut String,
    template: &str,
    start: usize,
    end: usize,
) -> Result<(), PatternError> {
    let literal = &template[start..end];
    if let Some(offset) = literal.find(['{', '}']) {
        return Err(PatternError::UnbalancedBrace {
            position: start + offset,
        });
    }
    source.push_str(&regex::escape(literal));
    Ok(())
}
