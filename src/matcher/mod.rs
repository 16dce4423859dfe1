pub mod normalize;
pub mod project;
pub mod rank;
pub mod stats;
pub mod vectorize;
pub mod vocabulary;

use std::collections::HashSet;
use std::sync::Arc;

use rayon::prelude::*;
use tracing::debug;

use normalize::SkillNormalizer;
use project::{ProjectRecord, RankedProject};
use rank::{dynamic_threshold, Ranking, FALLBACK_LIMIT};
use stats::IdfTable;
use vectorize::SkillVector;
use vocabulary::Vocabulary;

/// Skill-based project matcher.
///
/// Holds the vocabulary and the normalization memo cache; everything else is
/// recomputed per call from the catalog snapshot, so the same inputs always
/// produce the same ranking. The matcher is `Send + Sync` and one instance
/// can serve concurrent requests; the only shared mutation is the memo
/// cache, where racing misses harmlessly recompute the same entry.
#[derive(Debug)]
pub struct SkillMatcher {
    vocabulary: Arc<Vocabulary>,
    normalizer: SkillNormalizer,
}

impl SkillMatcher {
    /// Create a matcher over an injected vocabulary.
    pub fn new(vocabulary: Vocabulary) -> Self {
        let vocabulary = Arc::new(vocabulary);
        let normalizer = SkillNormalizer::new(Arc::clone(&vocabulary));
        Self {
            vocabulary,
            normalizer,
        }
    }

    /// Create a matcher over the production skill list.
    pub fn with_default_vocabulary() -> Self {
        Self::new(Vocabulary::default())
    }

    /// Replace the vocabulary. The normalization cache is keyed to one
    /// vocabulary value, so it is discarded along with the old one.
    pub fn set_vocabulary(&mut self, vocabulary: Vocabulary) {
        self.vocabulary = Arc::new(vocabulary);
        self.normalizer = SkillNormalizer::new(Arc::clone(&self.vocabulary));
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Canonicalize one free-text skill token.
    pub fn normalize_skill(&self, raw: &str) -> String {
        self.normalizer.normalize(raw)
    }

    /// Rank a catalog snapshot against a user's declared skills.
    ///
    /// Pipeline: normalize the catalog, build the per-call IDF table,
    /// vectorize user and projects, score every project with cosine
    /// similarity, keep those at or above the dynamic threshold sorted
    /// descending. When nothing clears the bar the top `FALLBACK_LIMIT`
    /// projects are returned instead, so a non-empty catalog never yields
    /// an empty result. An empty catalog yields an empty ranking.
    ///
    /// Projects are scored independently: an empty or junk skill list
    /// degrades that one project to similarity 0.
    pub fn rank_projects(&self, catalog: &[ProjectRecord], user_skills: &[String]) -> Ranking {
        if catalog.is_empty() {
            return Ranking::default();
        }
        let normalized_catalog: Vec<Vec<String>> = catalog
            .iter()
            .map(|p| self.normalizer.normalize_each(&p.skills_required))
            .collect();
        let idf = IdfTable::build(&self.vocabulary, &normalized_catalog);
        let user_vector = SkillVector::build(&self.vocabulary, &self.normalizer, &idf, user_skills);
        let threshold = dynamic_threshold(user_skills.len());
        debug!(
            projects = catalog.len(),
            user_skills = user_skills.len(),
            threshold,
            "ranking catalog snapshot"
        );

        let scored: Vec<RankedProject> = catalog
            .par_iter()
            .zip(normalized_catalog.par_iter())
            .map(|(project, skills)| {
                let vector = SkillVector::from_normalized(&self.vocabulary, &idf, skills);
                RankedProject {
                    project: project.clone(),
                    similarity: user_vector.similarity(&vector),
                }
            })
            .collect();

        let mut ranking = Ranking::new(
            scored
                .iter()
                .filter(|r| r.similarity >= threshold)
                .cloned()
                .collect(),
        );
        if ranking.is_empty() {
            debug!(limit = FALLBACK_LIMIT, "no project cleared the threshold, falling back");
            ranking = Ranking::new(scored);
            ranking.sort_by_score().truncate(FALLBACK_LIMIT);
        } else {
            ranking.sort_by_score();
        }
        ranking
    }

    /// TF-IDF vector of a user's skills against a catalog snapshot.
    /// The IDF table is built from that snapshot, exactly as in
    /// `rank_projects`.
    pub fn user_vector(&self, catalog: &[ProjectRecord], user_skills: &[String]) -> SkillVector {
        let normalized_catalog: Vec<Vec<String>> = catalog
            .iter()
            .map(|p| self.normalizer.normalize_each(&p.skills_required))
            .collect();
        let idf = IdfTable::build(&self.vocabulary, &normalized_catalog);
        SkillVector::build(&self.vocabulary, &self.normalizer, &idf, user_skills)
    }

    /// The `n` heaviest vocabulary skills of a vector, descending by weight.
    pub fn top_skills<'a>(&'a self, vector: &SkillVector, n: usize) -> Vec<&'a str> {
        vector
            .top_dimensions(n)
            .into_iter()
            .filter_map(|i| self.vocabulary.get(i))
            .collect()
    }

    /// Project skills the user lacks: entries of `project_skills` whose
    /// canonical form is not covered by any of the user's skills. Returned
    /// in project order, as written in the project record.
    pub fn skill_gaps(&self, user_skills: &[String], project_skills: &[String]) -> Vec<String> {
        let covered: HashSet<String> = user_skills
            .iter()
            .map(|s| self.normalizer.normalize(s))
            .collect();
        project_skills
            .iter()
            .filter(|s| !covered.contains(&self.normalizer.normalize(s)))
            .cloned()
            .collect()
    }
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::with_default_vocabulary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn project(id: &str, required: &[&str]) -> ProjectRecord {
        ProjectRecord::new(id, "owner", "title", "description", skills(required))
    }

    fn toy_matcher() -> SkillMatcher {
        SkillMatcher::new(Vocabulary::new(["Python", "React", "Docker"]).unwrap())
    }

    #[test]
    fn empty_catalog_yields_empty_ranking() {
        let matcher = toy_matcher();
        let ranking = matcher.rank_projects(&[], &skills(&["python"]));
        assert!(ranking.is_empty());
    }

    #[test]
    fn non_empty_catalog_never_yields_empty_ranking() {
        let matcher = toy_matcher();
        let catalog = vec![project("p1", &["React"])];
        let ranking = matcher.rank_projects(&catalog, &skills(&["python", "docker"]));
        assert!(!ranking.is_empty());
    }

    #[test]
    fn matching_project_outranks_disjoint_project() {
        // User leans python 2:1 over docker, with a fuzzy-cased "python".
        // React appears in 2 of 3 projects so its IDF is ln(3/3) = 0, while
        // Python and Docker keep positive weight; p2 has nothing the user
        // vector shares a nonzero dimension with.
        let matcher = toy_matcher();
        let catalog = vec![
            project("p1", &["Python", "Docker"]),
            project("p2", &["React"]),
            project("p3", &["React"]),
        ];
        let ranking = matcher.rank_projects(&catalog, &skills(&["python", "python", "docker"]));
        let p1 = ranking.iter().find(|r| r.project.id == "p1");
        let p1_score = p1.map(|r| r.similarity).unwrap_or(0.0);
        let p2_score = ranking
            .iter()
            .find(|r| r.project.id == "p2")
            .map(|r| r.similarity)
            .unwrap_or(0.0);
        assert!(
            p1_score > p2_score,
            "expected p1 ({p1_score}) above p2 ({p2_score})"
        );
        assert_eq!(ranking.iter().next().unwrap().project.id, "p1");
    }

    #[test]
    fn two_project_catalog_degenerates_to_zero_idf_tie() {
        // With 2 projects and every skill in exactly one of them, every IDF
        // is ln(2/2) = 0: all vectors zero out and the fallback returns
        // both projects at similarity 0.
        let matcher = toy_matcher();
        let catalog = vec![
            project("p1", &["Python", "Docker"]),
            project("p2", &["React"]),
        ];
        let ranking = matcher.rank_projects(&catalog, &skills(&["python", "python", "docker"]));
        assert_eq!(ranking.len(), 2);
        for r in ranking.iter() {
            assert_eq!(r.similarity, 0.0);
        }
    }

    #[test]
    fn empty_user_skills_fall_back_to_whole_small_catalog() {
        let matcher = SkillMatcher::new(Vocabulary::new(["Go"]).unwrap());
        let catalog = vec![project("only", &["Go"])];
        let ranking = matcher.rank_projects(&catalog, &[]);
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking.iter().next().unwrap().project.id, "only");
        assert_eq!(ranking.iter().next().unwrap().similarity, 0.0);
    }

    #[test]
    fn fallback_caps_at_five_projects_sorted_descending() {
        let matcher = SkillMatcher::with_default_vocabulary();
        let catalog: Vec<ProjectRecord> = (0..10)
            .map(|i| project(&format!("p{i}"), &["Rust", "Go"]))
            .collect();
        // 8 declared skills sharing nothing with the catalog: every
        // similarity is 0 and nothing clears the 0.18 bar.
        let user = skills(&[
            "React",
            "Vue",
            "Angular",
            "CSS",
            "HTML",
            "PHP",
            "SQL",
            "Firebase",
        ]);
        let ranking = matcher.rank_projects(&catalog, &user);
        assert_eq!(ranking.len(), 5);
        let scores: Vec<f64> = ranking.iter().map(|r| r.similarity).collect();
        for pair in scores.windows(2) {
            assert!(pair[0] >= pair[1], "fallback not sorted descending");
        }
    }

    #[test]
    fn ranking_is_deterministic_across_calls() {
        let matcher = SkillMatcher::with_default_vocabulary();
        let catalog = vec![
            project("a", &["Rust", "Docker", "Kubernetes"]),
            project("b", &["React", "TypeScript"]),
            project("c", &["Python", "Machine Learning", "Docker"]),
            project("d", &["go", "docker"]),
        ];
        let user = skills(&["rust", "docker", "pyhton"]);
        let first = matcher.rank_projects(&catalog, &user);
        let second = matcher.rank_projects(&catalog, &user);
        let ids = |r: &Ranking| -> Vec<String> {
            r.iter().map(|x| x.project.id.clone()).collect()
        };
        assert_eq!(ids(&first), ids(&second));
        for (x, y) in first.iter().zip(second.iter()) {
            assert_eq!(x.similarity, y.similarity);
        }
    }

    #[test]
    fn similarity_annotations_stay_in_bounds() {
        let matcher = SkillMatcher::with_default_vocabulary();
        let catalog = vec![
            project("a", &["Rust"]),
            project("b", &["Rust", "Go", "Docker"]),
            project("c", &[]),
            project("d", &["underwater archery"]),
        ];
        let ranking = matcher.rank_projects(&catalog, &skills(&["rust", "go"]));
        for r in ranking.iter() {
            assert!(
                (0.0..=1.0).contains(&r.similarity),
                "similarity out of bounds: {}",
                r.similarity
            );
        }
    }

    #[test]
    fn malformed_project_skill_lists_score_zero_without_aborting() {
        let matcher = toy_matcher();
        let catalog = vec![
            project("empty", &[]),
            project("junk", &["?!", "   "]),
            project("real", &["Python"]),
            project("also", &["Docker"]),
        ];
        let ranking = matcher.rank_projects(&catalog, &skills(&["python"]));
        // all four projects were scored, none aborted the pass
        assert!(!ranking.is_empty());
        let empty = ranking.iter().find(|r| r.project.id == "empty");
        if let Some(r) = empty {
            assert_eq!(r.similarity, 0.0);
        }
    }

    #[test]
    fn set_vocabulary_resets_the_memo_cache() {
        let mut matcher = toy_matcher();
        assert_eq!(matcher.normalize_skill("pyhton"), "Python");
        matcher.set_vocabulary(Vocabulary::new(["Go", "Rust"]).unwrap());
        // the old resolution must not leak out of the cache
        assert_eq!(matcher.normalize_skill("pyhton"), "pyhton");
        assert_eq!(matcher.normalize_skill("rsut"), "Rust");
    }

    #[test]
    fn top_skills_reports_heaviest_dimensions() {
        let matcher = toy_matcher();
        let catalog = vec![
            project("p1", &["Python", "Docker"]),
            project("p2", &["React"]),
            project("p3", &["React"]),
        ];
        let user = skills(&["docker", "docker", "python"]);
        let vector = matcher.user_vector(&catalog, &user);
        let top = matcher.top_skills(&vector, 2);
        assert_eq!(top[0], "Docker");
        assert_eq!(top[1], "Python");
    }

    #[test]
    fn skill_gaps_report_uncovered_project_skills_verbatim() {
        let matcher = SkillMatcher::with_default_vocabulary();
        let gaps = matcher.skill_gaps(
            &skills(&["pyhton", "docker"]),
            &skills(&["Python", "Kubernetes", "Docker", "Rust"]),
        );
        assert_eq!(gaps, ["Kubernetes", "Rust"]);
    }
}
