use std::fmt::Debug;

use super::project::RankedProject;

/// Acceptance bar for a user with zero declared skills.
pub const BASE_THRESHOLD: f64 = 0.1;
/// Hard cap on the acceptance bar.
pub const MAX_THRESHOLD: f64 = 0.3;
/// Bar increase per declared user skill.
pub const THRESHOLD_INCREMENT: f64 = 0.01;
/// Result count when nothing clears the bar.
pub const FALLBACK_LIMIT: usize = 5;

/// Acceptance threshold for a given number of declared user skills.
///
/// `min(0.3, 0.1 + 0.01 * user_skill_count)`
///
/// A long skill list spreads its weight thin, so each individual match is
/// weaker and a fixed low bar would admit noise; the cap keeps the bar
/// reachable for prolific skill-listers.
pub fn dynamic_threshold(user_skill_count: usize) -> f64 {
    MAX_THRESHOLD.min(BASE_THRESHOLD + user_skill_count as f64 * THRESHOLD_INCREMENT)
}

/// Ordered matching result.
#[derive(Clone, Default)]
pub struct Ranking {
    /// Scored projects, descending by similarity after `sort_by_score`.
    pub list: Vec<RankedProject>,
}

impl Ranking {
    pub fn new(list: Vec<RankedProject>) -> Self {
        Ranking { list }
    }

    /// Sort by descending similarity. NaN scores cannot be ordered and are
    /// dropped; within equal scores the input order is kept.
    pub fn sort_by_score(&mut self) -> &mut Self {
        self.list.retain(|r| !r.similarity.is_nan());
        self.list.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        self
    }

    /// Keep only the first `n` entries.
    pub fn truncate(&mut self, n: usize) -> &mut Self {
        self.list.truncate(n);
        self
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedProject> {
        self.list.iter()
    }

    pub fn into_vec(self) -> Vec<RankedProject> {
        self.list
    }
}

impl Debug for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            writeln!(f, "Ranking [")?;
            for ranked in &self.list {
                writeln!(
                    f,
                    "    {:?}: {:.6} ({} skills)",
                    ranked.project.id,
                    ranked.similarity,
                    ranked.project.skills_required.len()
                )?;
            }
            write!(f, "]")
        } else {
            f.debug_list()
                .entries(self.list.iter().map(|r| (&r.project.id, r.similarity)))
                .finish()
        }
    }
}
