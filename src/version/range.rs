// src/version/range.rs

//! Version ranges with interval restrictions
//!
//! A range is either a soft recommendation (`1.0`: everything admissible,
//! 1.0 preferred), a hard pin (`[1.0]`), or a union of bracketed intervals
//! (`[1.0,2.0)`, `(,1.0],[1.2,)`). Ranges support restriction (intersection
//! against another range) and matching against a catalog of available
//! versions.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};
use crate::version::Version;

/// A single interval of admissible versions
///
/// `None` bounds are unbounded ends; the all-admissible restriction is
/// `(,)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restriction {
    lower: Option<Version>,
    lower_inclusive: bool,
    upper: Option<Version>,
    upper_inclusive: bool,
}

impl Restriction {
    /// The restriction admitting every version.
    pub fn everything() -> Self {
        Restriction {
            lower: None,
            lower_inclusive: false,
            upper: None,
            upper_inclusive: false,
        }
    }

    fn new(
        lower: Option<Version>,
        lower_inclusive: bool,
        upper: Option<Version>,
        upper_inclusive: bool,
    ) -> Self {
        Restriction {
            lower,
            lower_inclusive,
            upper,
            upper_inclusive,
        }
    }

    /// Whether the version lies inside this interval.
    pub fn contains(&self, version: &Version) -> bool {
        if let Some(lower) = &self.lower {
            match version.cmp(lower) {
                Ordering::Less => return false,
                Ordering::Equal if !self.lower_inclusive => return false,
                _ => {}
            }
        }
        if let Some(upper) = &self.upper {
            match version.cmp(upper) {
                Ordering::Greater => return false,
                Ordering::Equal if !self.upper_inclusive => return false,
                _ => {}
            }
        }
        true
    }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.lower_inclusive { '[' } else { '(' })?;
        if let Some(lower) = &self.lower {
            write!(f, "{}", lower)?;
        }
        write!(f, ",")?;
        if let Some(upper) = &self.upper {
            write!(f, "{}", upper)?;
        }
        write!(f, "{}", if self.upper_inclusive { ']' } else { ')' })
    }
}

/// A version constraint: a recommended version, interval restrictions, or
/// both
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    recommended: Option<Version>,
    restrictions: Vec<Restriction>,
}

impl VersionRange {
    /// Parse a range specification.
    ///
    /// A bare version is a soft recommendation; bracketed sets are hard
    /// restrictions and may be unioned with commas. Mixing the two forms is
    /// rejected, as are single versions without `[ ]`, identical interval
    /// boundaries, and inverted bounds.
    pub fn parse(spec: &str) -> Result<VersionRange> {
        let mut restrictions = Vec::new();
        let mut process = spec.trim();
        let mut upper_of_last: Option<Version> = None;

        while process.starts_with('[') || process.starts_with('(') {
            let close_square = process.find(']');
            let close_round = process.find(')');
            let end = match (close_square, close_round) {
                (Some(square), Some(round)) if round < square => round,
                (Some(square), _) => square,
                (None, Some(round)) => round,
                (None, None) => {
                    return Err(Error::InvalidRange {
                        spec: spec.to_string(),
                        reason: "unbounded set".to_string(),
                    });
                }
            };

            let restriction = parse_restriction(spec, &process[..=end])?;
            if let Some(previous_upper) = &upper_of_last {
                if restriction
                    .lower
                    .as_ref()
                    .is_none_or(|lower| lower < previous_upper)
                {
                    return Err(Error::InvalidRange {
                        spec: spec.to_string(),
                        reason: "ranges overlap".to_string(),
                    });
                }
            }
            upper_of_last = restriction.upper.clone();
            restrictions.push(restriction);

            process = process[end + 1..].trim();
            if let Some(rest) = process.strip_prefix(',') {
                process = rest.trim();
            }
        }

        let mut recommended = None;
        if !process.is_empty() {
            if !restrictions.is_empty() {
                return Err(Error::InvalidRange {
                    spec: spec.to_string(),
                    reason: "only fully-qualified sets are allowed alongside other sets"
                        .to_string(),
                });
            }
            recommended = Some(Version::new(process));
            restrictions.push(Restriction::everything());
        }

        Ok(VersionRange {
            recommended,
            restrictions,
        })
    }

    /// A range pinned to a concrete, already-selected version: the version
    /// is recommended and no restrictions apply.
    pub fn pinned(version: Version) -> VersionRange {
        VersionRange {
            recommended: Some(version),
            restrictions: Vec::new(),
        }
    }

    /// The recommended (selected) version, if the range knows one.
    pub fn recommended(&self) -> Option<&Version> {
        self.recommended.as_ref()
    }

    /// The interval restrictions, in ascending order.
    pub fn restrictions(&self) -> &[Restriction] {
        &self.restrictions
    }

    /// Whether this range actually restricts anything: it carries intervals
    /// and no outright recommendation.
    pub fn has_restrictions(&self) -> bool {
        !self.restrictions.is_empty() && self.recommended.is_none()
    }

    /// Whether the version lies inside any of the restrictions.
    pub fn contains(&self, version: &Version) -> bool {
        self.restrictions.iter().any(|r| r.contains(version))
    }

    /// Intersect this range with another.
    ///
    /// The result's restrictions are the interval intersection; the result's
    /// recommendation is this range's if it survives the intersection, else
    /// the other's, and with an empty intersection whichever recommendation
    /// exists (own first) so a later conflict report can still name both
    /// versions.
    pub fn restrict(&self, other: &VersionRange) -> VersionRange {
        let restrictions = if self.restrictions.is_empty() || other.restrictions.is_empty() {
            Vec::new()
        } else {
            intersection(&self.restrictions, &other.restrictions)
        };

        let mut recommended = None;
        if !restrictions.is_empty() {
            for restriction in &restrictions {
                if let Some(own) = &self.recommended {
                    if restriction.contains(own) {
                        recommended = Some(own.clone());
                        break;
                    }
                }
                if recommended.is_none() {
                    if let Some(theirs) = &other.recommended {
                        if restriction.contains(theirs) {
                            recommended = Some(theirs.clone());
                        }
                    }
                }
            }
        } else if self.recommended.is_some() {
            recommended = self.recommended.clone();
        } else {
            recommended = other.recommended.clone();
        }

        VersionRange {
            recommended,
            restrictions,
        }
    }

    /// The highest of the given versions that satisfies this range, or
    /// `None` when nothing matches.
    pub fn match_version<'a>(&self, versions: &'a [Version]) -> Option<&'a Version> {
        let mut matched: Option<&Version> = None;
        for version in versions {
            if self.contains(version) && matched.is_none_or(|m| version > m) {
                matched = Some(version);
            }
        }
        matched
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(recommended) = &self.recommended {
            write!(f, "{}", recommended)
        } else {
            let mut first = true;
            for restriction in &self.restrictions {
                if !first {
                    write!(f, ",")?;
                }
                first = false;
                write!(f, "{}", restriction)?;
            }
            Ok(())
        }
    }
}

fn parse_restriction(spec: &str, set: &str) -> Result<Restriction> {
    let invalid = |reason: &str| Error::InvalidRange {
        spec: spec.to_string(),
        reason: reason.to_string(),
    };

    let lower_inclusive = set.starts_with('[');
    let upper_inclusive = set.ends_with(']');
    let inner = set[1..set.len() - 1].trim();

    match inner.find(',') {
        None => {
            if !lower_inclusive || !upper_inclusive {
                return Err(invalid("single version must be surrounded by []"));
            }
            let version = Version::new(inner);
            Ok(Restriction::new(
                Some(version.clone()),
                true,
                Some(version),
                true,
            ))
        }
        Some(index) => {
            let lower_text = inner[..index].trim();
            let upper_text = inner[index + 1..].trim();
            if !lower_text.is_empty() && lower_text == upper_text {
                return Err(invalid("range cannot have identical boundaries"));
            }
            let lower = (!lower_text.is_empty()).then(|| Version::new(lower_text));
            let upper = (!upper_text.is_empty()).then(|| Version::new(upper_text));
            if let (Some(lower), Some(upper)) = (&lower, &upper) {
                if upper < lower {
                    return Err(invalid("range defies version ordering"));
                }
            }
            Ok(Restriction::new(
                lower,
                lower_inclusive,
                upper,
                upper_inclusive,
            ))
        }
    }
}

/// Walk two ascending restriction lists and collect their pairwise
/// overlaps, advancing whichever side's upper bound closed the overlap.
fn intersection(r1: &[Restriction], r2: &[Restriction]) -> Vec<Restriction> {
    let mut restrictions = Vec::with_capacity(r1.len() + r2.len());
    let mut i1 = r1.iter();
    let mut i2 = r2.iter();
    let mut res1 = match i1.next() {
        Some(r) => r,
        None => return restrictions,
    };
    let mut res2 = match i2.next() {
        Some(r) => r,
        None => return restrictions,
    };

    loop {
        let starts_before_other_ends = match (&res1.lower, &res2.upper) {
            (Some(lower), Some(upper)) => lower <= upper,
            _ => true,
        };
        if !starts_before_other_ends {
            match i2.next() {
                Some(next) => res2 = next,
                None => break,
            }
            continue;
        }

        let ends_after_other_starts = match (&res1.upper, &res2.lower) {
            (Some(upper), Some(lower)) => upper >= lower,
            _ => true,
        };
        if !ends_after_other_starts {
            match i1.next() {
                Some(next) => res1 = next,
                None => break,
            }
            continue;
        }

        // overlap: the tighter bound on each end wins, inclusivity is
        // conjunctive on equal bounds
        let (lower, lower_inclusive) = match (&res1.lower, &res2.lower) {
            (None, None) => (None, false),
            (None, Some(l)) => (Some(l.clone()), res2.lower_inclusive),
            (Some(l), None) => (Some(l.clone()), res1.lower_inclusive),
            (Some(l1), Some(l2)) => match l1.cmp(l2) {
                Ordering::Less => (Some(l2.clone()), res2.lower_inclusive),
                Ordering::Equal => (
                    Some(l1.clone()),
                    res1.lower_inclusive && res2.lower_inclusive,
                ),
                Ordering::Greater => (Some(l1.clone()), res1.lower_inclusive),
            },
        };
        let (upper, upper_inclusive, upper_from_r2) = match (&res1.upper, &res2.upper) {
            (None, None) => (None, false, true),
            (None, Some(u)) => (Some(u.clone()), res2.upper_inclusive, true),
            (Some(u), None) => (Some(u.clone()), res1.upper_inclusive, false),
            (Some(u1), Some(u2)) => match u1.cmp(u2) {
                Ordering::Less => (Some(u1.clone()), res1.upper_inclusive, false),
                Ordering::Equal => (
                    Some(u1.clone()),
                    res1.upper_inclusive && res2.upper_inclusive,
                    false,
                ),
                Ordering::Greater => (Some(u2.clone()), res2.upper_inclusive, true),
            },
        };

        // drop degenerate intervals like [1.0,1.0) that exclude their only
        // candidate
        let degenerate = match (&lower, &upper) {
            (Some(l), Some(u)) => l == u && !(lower_inclusive && upper_inclusive),
            _ => false,
        };
        if !degenerate {
            restrictions.push(Restriction::new(
                lower,
                lower_inclusive,
                upper,
                upper_inclusive,
            ));
        }

        let advanced = if upper_from_r2 {
            i2.next().map(|next| res2 = next)
        } else {
            i1.next().map(|next| res1 = next)
        };
        if advanced.is_none() {
            break;
        }
    }

    restrictions
}
