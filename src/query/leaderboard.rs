use tracing::debug;

use crate::model::{College, PointsCategory, RankedCollege};

/// Rank every college by overall points, descending, attaching 1-based
/// positions.
///
/// The sort is stable, so colleges with equal overall points keep their
/// input order; no further tie-breaking is applied. The input is never
/// mutated.
pub fn rank_colleges(colleges: &[College]) -> Vec<RankedCollege> {
    rank_by(colleges, PointsCategory::Overall, colleges.len())
}

/// Top `n` colleges by the chosen sub-score, with fresh 1-based ranks
/// scoped to that view. `PointsCategory::Overall` orders identically to
/// [`rank_colleges`].
pub fn top_by_category(colleges: &[College], category: PointsCategory, n: usize) -> Vec<RankedCollege> {
    let ranked = rank_by(colleges, category, n);
    debug!(%category, n, count = ranked.len(), "leaderboard query");
    ranked
}

fn rank_by(colleges: &[College], category: PointsCategory, n: usize) -> Vec<RankedCollege> {
    let mut ordered: Vec<College> = colleges.to_vec();
    ordered.sort_by(|a, b| b.points.score(category).cmp(&a.points.score(category)));
    ordered
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(i, college)| RankedCollege {
            rank: i as u32 + 1,
            college,
        })
        .collect()
}
