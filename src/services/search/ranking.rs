//! Stage 6: final ordering.

use std::cmp::Ordering;

use crate::models::RankedResult;

/// Sorts results in place, best first.
///
/// With a rating constraint: rating descending, then relevance descending.
/// Otherwise: `relevance * 2 + rating` descending. The sort is stable, so
/// records with equal keys keep their merge order.
pub fn rank(results: &mut [RankedResult], rating_constrained: bool) {
    if rating_constrained {
        results.sort_by(|a, b| {
            descending(a.rating_or_zero(), b.rating_or_zero())
                .then_with(|| b.relevance_score.cmp(&a.relevance_score))
        });
    } else {
        results.sort_by(|a, b| descending(hybrid_score(a), hybrid_score(b)));
    }
}

/// Blend of relevance and rating used when no rating was requested
pub fn hybrid_score(result: &RankedResult) -> f64 {
    f64::from(result.relevance_score) * 2.0 + result.rating_or_zero()
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
