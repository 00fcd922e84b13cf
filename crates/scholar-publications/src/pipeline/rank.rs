//! Publication ordering.

use std::cmp::Reverse;

use crate::models::PublicationRecord;

/// Sort by year, then citations, both descending.
///
/// Years compare as strings, so `"999"` sorts above `"2020"` and `"n.d."` above
/// every numeric year. The sort is stable: full ties keep their input order.
pub fn rank(publications: &mut [PublicationRecord]) {
    publications.sort_by(|a, b| {
        (Reverse(a.year.as_str()), Reverse(a.citations))
            .cmp(&(Reverse(b.year.as_str()), Reverse(b.citations)))
    });
}
