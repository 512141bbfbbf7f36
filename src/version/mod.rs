// src/version/mod.rs

//! Version handling and constraint satisfaction for artifact dependencies
//!
//! This module provides the generic multi-component version scheme used by
//! coordinate-addressed artifacts: components are split on `.`, `-`, `+` and
//! on digit/letter transitions, numeric components compare numerically,
//! string qualifiers compare lexically with the conventional special cases
//! (`alpha < beta < milestone < rc < snapshot < release < sp`), and `-`
//! starts a nested sub-version. `1.0` equals `1`, `1.0-SNAPSHOT` sorts below
//! `1.0`, and `1.0.RC1 < 1.0-RC2 < 1.0.1`.

mod range;

pub use range::{Restriction, VersionRange};

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A parsed artifact version with a total order
///
/// The original spelling is preserved for display and serialization;
/// ordering, equality, and hashing all work on the parsed token tree, so
/// `1.0` and `1` are the same version.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Version {
    raw: String,
    tokens: Vec<Token>,
}

impl Version {
    /// Parse a version string. Parsing never fails: any string tokenizes
    /// into some position in the version order.
    pub fn new(version: impl Into<String>) -> Self {
        let raw = version.into();
        let tokens = tokenize(&raw);
        Version { raw, tokens }
    }

    /// The version exactly as it was written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Version {
    fn from(s: &str) -> Self {
        Version::new(s)
    }
}

impl From<String> for Version {
    fn from(s: String) -> Self {
        Version::new(s)
    }
}

impl From<Version> for String {
    fn from(v: Version) -> Self {
        v.raw
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tokens.hash(state);
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_lists(&self.tokens, &other.tokens)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One component of a parsed version.
///
/// Numbers are kept as decimal strings with leading zeroes stripped, so
/// comparison by (length, lexical) is exact for arbitrary widths. A `List`
/// is the nested sub-version a `-` separator introduces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Token {
    Number(String),
    Qualifier(String),
    List(Vec<Token>),
}

impl Token {
    /// Whether this token is a padding-equivalent null (`0`, the release
    /// qualifier, an empty sub-version).
    fn is_null(&self) -> bool {
        match self {
            Token::Number(n) => n == "0",
            Token::Qualifier(q) => q.is_empty(),
            Token::List(l) => l.is_empty(),
        }
    }

    /// Compare against another token, where `None` is the implicit padding
    /// for the shorter of two versions.
    fn cmp_token(&self, other: Option<&Token>) -> Ordering {
        match (self, other) {
            (Token::Number(n), None) => {
                if n == "0" {
                    Ordering::Equal
                } else {
                    Ordering::Greater
                }
            }
            (Token::Number(a), Some(Token::Number(b))) => cmp_numbers(a, b),
            // 1.1 > 1-sp and 1.1 > 1-1
            (Token::Number(_), Some(Token::Qualifier(_) | Token::List(_))) => Ordering::Greater,

            // 1-rc < 1, 1-sp > 1
            (Token::Qualifier(q), None) => cmp_qualifiers(q, ""),
            (Token::Qualifier(_), Some(Token::Number(_))) => Ordering::Less,
            (Token::Qualifier(a), Some(Token::Qualifier(b))) => cmp_qualifiers(a, b),
            (Token::Qualifier(_), Some(Token::List(_))) => Ordering::Less,

            (Token::List(l), None) => {
                for item in l {
                    let result = item.cmp_token(None);
                    if result != Ordering::Equal {
                        return result;
                    }
                }
                Ordering::Equal
            }
            (Token::List(_), Some(Token::Number(_))) => Ordering::Less, // 1-1 < 1.0.x
            (Token::List(_), Some(Token::Qualifier(_))) => Ordering::Greater, // 1-1 > 1-sp
            (Token::List(a), Some(Token::List(b))) => cmp_lists(a, b),
        }
    }
}

fn cmp_lists(left: &[Token], right: &[Token]) -> Ordering {
    let len = left.len().max(right.len());
    for i in 0..len {
        let result = match (left.get(i), right.get(i)) {
            (Some(l), r) => l.cmp_token(r),
            (None, Some(r)) => r.cmp_token(None).reverse(),
            (None, None) => Ordering::Equal,
        };
        if result != Ordering::Equal {
            return result;
        }
    }
    Ordering::Equal
}

/// Numeric comparison of stripped decimal strings: a longer string is a
/// bigger number, equal lengths compare lexically.
fn cmp_numbers(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Qualifier ordering: `snapshot < "" (release) < sp`, every other
/// qualifier lexically among themselves and below `snapshot`.
fn cmp_qualifiers(a: &str, b: &str) -> Ordering {
    let rank = |q: &str| match q {
        "snapshot" => 1,
        "" => 2,
        "sp" => 3,
        _ => 0,
    };
    match (rank(a), rank(b)) {
        (0, 0) => a.cmp(b),
        (ra, rb) => ra.cmp(&rb),
    }
}

/// Canonicalize a qualifier: expand the single-letter `a`/`b`/`m` shorthands
/// when a digit follows, and map the release aliases to the empty qualifier.
fn canonical_qualifier(value: &str, followed_by_digit: bool) -> String {
    let value = if followed_by_digit && value.len() == 1 {
        match value {
            "a" => "alpha",
            "b" => "beta",
            "m" => "milestone",
            other => other,
        }
    } else {
        value
    };
    match value {
        "cr" => "rc".to_string(),
        "final" | "ga" | "release" => String::new(),
        other => other.to_string(),
    }
}

fn parse_item(is_digit: bool, text: &str) -> Token {
    if is_digit {
        Token::Number(strip_leading_zeroes(text))
    } else {
        Token::Qualifier(canonical_qualifier(text, false))
    }
}

fn strip_leading_zeroes(text: &str) -> String {
    let stripped = text.trim_start_matches('0');
    if stripped.is_empty() {
        "0".to_string()
    } else {
        stripped.to_string()
    }
}

/// Remove trailing null components, scanning backwards past (but keeping)
/// non-null sub-versions.
fn normalize(items: &mut Vec<Token>) {
    let mut i = items.len();
    while i > 0 {
        i -= 1;
        if items[i].is_null() {
            items.remove(i);
        } else if !matches!(items[i], Token::List(_)) {
            break;
        }
    }
}

/// Split a version string into its token tree.
///
/// `.`, `-`, `+` separate components; a `-` (or a digit/letter transition,
/// which counts as one) starts a nested sub-version. The nesting forms a
/// linear chain, so an explicit stack of open lists suffices: unwinding
/// appends each normalized child into its parent.
fn tokenize(version: &str) -> Vec<Token> {
    let lower = version.to_lowercase();
    let mut stack: Vec<Vec<Token>> = vec![Vec::new()];
    let mut is_digit = false;
    let mut start = 0;

    macro_rules! current {
        () => {
            stack.last_mut().expect("stack is never empty")
        };
    }

    for (i, c) in lower.char_indices() {
        if c == '.' || c == '-' || c == '+' {
            if i == start {
                current!().push(Token::Number("0".to_string()));
            } else {
                let item = parse_item(is_digit, &lower[start..i]);
                current!().push(item);
            }
            start = i + c.len_utf8();
            if c != '.' || !is_digit {
                stack.push(Vec::new());
            }
        } else if c.is_ascii_digit() {
            if !is_digit && i > start {
                // a letter run directly followed by a digit counts as a
                // `-`-separated qualifier, so 1.0.RC1 == 1.0-RC1
                if !current!().is_empty() {
                    stack.push(Vec::new());
                }
                let qualifier = canonical_qualifier(&lower[start..i], true);
                current!().push(Token::Qualifier(qualifier));
                start = i;
                stack.push(Vec::new());
            }
            is_digit = true;
        } else {
            if is_digit && i > start {
                let item = parse_item(true, &lower[start..i]);
                current!().push(item);
                start = i;
                stack.push(Vec::new());
            }
            is_digit = false;
        }
    }

    if lower.len() > start {
        if !is_digit && !current!().is_empty() {
            stack.push(Vec::new());
        }
        let item = parse_item(is_digit, &lower[start..]);
        current!().push(item);
    }

    while stack.len() > 1 {
        let mut child = stack.pop().unwrap_or_default();
        normalize(&mut child);
        current!().push(Token::List(child));
    }
    let mut root = stack.pop().unwrap_or_default();
    normalize(&mut root);
    root
}
