//! Edge-pair intersection records and duplicate bookkeeping.
//!
//! Purpose
//! - An intersection of two triangle edges is a parameter pair `(s, t)` on a
//!   specific pair of edge indices. Corner intersections are reported by
//!   several edge pairs at once; the driver filters those as duplicates, and
//!   [`verify_duplicates`] checks that the filtered set obeys the corner
//!   multiplicity rules.

use std::collections::HashMap;

use thiserror::Error;

/// Default relative tolerance for parameter agreement between two
/// intersections.
pub const SAME_INTERSECTION_WIGGLE: f64 = 9.094_947_017_729_282e-13; // 0.5^40

/// A transversal intersection between edge `index_first` of one triangle and
/// edge `index_second` of another, at parameters `s` and `t` respectively.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub index_first: usize,
    pub s: f64,
    pub index_second: usize,
    pub t: f64,
}

impl Intersection {
    #[inline]
    pub fn new(index_first: usize, s: f64, index_second: usize, t: f64) -> Self {
        Self {
            index_first,
            s,
            index_second,
            t,
        }
    }
}

/// Violations of the duplicate-filtering contract.
#[derive(Debug, Error, PartialEq)]
pub enum DuplicateError {
    /// Two entries of the unique set agree to machine precision.
    #[error("non-unique intersection at edges ({index_first}, {index_second})")]
    NonUnique {
        index_first: usize,
        index_second: usize,
    },
    /// A duplicate matched no unique entry, or more than one.
    #[error("duplicate matched {matches} unique intersections, expected exactly 1")]
    UnmatchedDuplicate { matches: usize },
    /// A once-duplicated intersection must sit on exactly one corner
    /// (exactly one of s, t equal to 0).
    #[error("single duplicate at (s, t) = ({s}, {t}) is not a single corner")]
    NotSingleCorner { s: f64, t: f64 },
    /// A thrice-duplicated intersection must be the double corner
    /// (s = t = 0).
    #[error("triple duplicate at (s, t) = ({s}, {t}) is not the double corner")]
    NotDoubleCorner { s: f64, t: f64 },
    /// Any multiplicity other than one or three is unexpected.
    #[error("unexpected duplicate count {count}")]
    UnexpectedCount { count: usize },
}

/// Check whether two intersections agree: same edge pair and both
/// parameters equal to relative tolerance `wiggle`
/// (`|a − b| <= wiggle · |b|`, component-wise).
pub fn same_intersection(
    intersection1: &Intersection,
    intersection2: &Intersection,
    wiggle: f64,
) -> bool {
    if intersection1.index_first != intersection2.index_first {
        return false;
    }
    if intersection1.index_second != intersection2.index_second {
        return false;
    }
    (intersection1.s - intersection2.s).abs() <= wiggle * intersection2.s.abs()
        && (intersection1.t - intersection2.t).abs() <= wiggle * intersection2.t.abs()
}

/// Verify that a filtered intersection set had the expected duplicates.
///
/// `uniques` must be pairwise distinct; every entry of `duplicates` must
/// match exactly one unique. A unique duplicated once must lie on exactly
/// one corner, one duplicated three times must be the double corner, and
/// any other multiplicity is an error.
pub fn verify_duplicates(
    duplicates: &[Intersection],
    uniques: &[Intersection],
) -> Result<(), DuplicateError> {
    for (pos, uniq1) in uniques.iter().enumerate() {
        for uniq2 in &uniques[pos + 1..] {
            if same_intersection(uniq1, uniq2, SAME_INTERSECTION_WIGGLE) {
                return Err(DuplicateError::NonUnique {
                    index_first: uniq1.index_first,
                    index_second: uniq1.index_second,
                });
            }
        }
    }
    let mut counter: HashMap<usize, usize> = HashMap::new();
    for dupe in duplicates {
        let matches: Vec<usize> = uniques
            .iter()
            .enumerate()
            .filter(|(_, uniq)| same_intersection(dupe, *uniq, SAME_INTERSECTION_WIGGLE))
            .map(|(index, _)| index)
            .collect();
        if matches.len() != 1 {
            return Err(DuplicateError::UnmatchedDuplicate {
                matches: matches.len(),
            });
        }
        *counter.entry(matches[0]).or_insert(0) += 1;
    }
    for (&index, &count) in &counter {
        let uniq = &uniques[index];
        match count {
            1 => {
                let corners = usize::from(uniq.s == 0.0) + usize::from(uniq.t == 0.0);
                if corners != 1 {
                    return Err(DuplicateError::NotSingleCorner {
                        s: uniq.s,
                        t: uniq.t,
                    });
                }
            }
            3 => {
                if uniq.s != 0.0 || uniq.t != 0.0 {
                    return Err(DuplicateError::NotDoubleCorner {
                        s: uniq.s,
                        t: uniq.t,
                    });
                }
            }
            _ => return Err(DuplicateError::UnexpectedCount { count }),
        }
    }
    Ok(())
}
