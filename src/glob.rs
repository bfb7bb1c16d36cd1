//! Wildcard name patterns for component and attribute configuration.
//!
//! `*` matches any run of characters (including none), `?` matches exactly
//! one character, everything else matches itself. Matching is anchored and
//! case-sensitive. There is no escaping and no character classes.

use regex::Regex;
use serde::Deserialize;

/// Whether `pattern` contains a wildcard.
pub fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?'])
}

/// Match `name` against `pattern` in one shot, without compiling anything.
///
/// Configuration code should prefer [`NamePattern`], which compiles once.
pub fn matches(name: &str, pattern: &str) -> bool {
    if !is_glob(pattern) {
        return name == pattern;
    }

    let name: Vec<char> = name.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    let (mut n, mut p) = (0, 0);
    // last `*` seen, and the name position it currently absorbs up to
    let mut backtrack: Option<(usize, usize)> = None;

    while n < name.len() {
        match pattern.get(p) {
            Some('*') => {
                backtrack = Some((p, n));
                p += 1;
            }
            Some(&c) if c == '?' || c == name[n] => {
                n += 1;
                p += 1;
            }
            _ => match backtrack {
                Some((star, absorbed)) => {
                    backtrack = Some((star, absorbed + 1));
                    p = star + 1;
                    n = absorbed + 1;
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}

/// A compiled wildcard pattern.
#[derive(Debug, Clone)]
pub struct Glob {
    pattern: String,
    regex: Regex,
}

impl Glob {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let mut source = String::with_capacity(pattern.len() * 2 + 8);
        source.push_str("^(?s:");
        let mut buf = [0u8; 4];
        for ch in pattern.chars() {
            match ch {
                '*' => source.push_str(".*"),
                '?' => source.push('.'),
                _ => source.push_str(&regex::escape(ch.encode_utf8(&mut buf))),
            }
        }
        source.push_str(")$");

        Ok(Self {
            pattern: pattern.to_string(),
            regex: Regex::new(&source)?,
        })
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}

/// A configured name: a literal compared for equality, or a glob.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "String")]
pub enum NamePattern {
    Exact(String),
    Glob(Glob),
}

impl NamePattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        if is_glob(pattern) {
            Ok(NamePattern::Glob(Glob::new(pattern)?))
        } else {
            Ok(NamePattern::Exact(pattern.to_string()))
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, NamePattern::Exact(_))
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            NamePattern::Exact(literal) => literal == name,
            NamePattern::Glob(glob) => glob.is_match(name),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            NamePattern::Exact(literal) => literal,
            NamePattern::Glob(glob) => glob.as_str(),
        }
    }
}

impl TryFrom<String> for NamePattern {
    type Error = regex::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        NamePattern::new(&value)
    }
}

impl PartialEq for NamePattern {
    fn eq(&self, other: &Self) -> bool {
        self.is_exact() == other.is_exact() && self.as_str() == other.as_str()
    }
}

impl Eq for NamePattern {}
