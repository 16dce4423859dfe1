/// This crate is a skill-based project matching engine built on TF-IDF
/// weighting and cosine similarity.
pub mod matcher;
pub mod utils;

/// Skill Matcher
/// The top-level struct of this crate, providing the full matching pipeline.
/// It canonicalizes free-text skill tokens, derives per-call corpus
/// statistics from a project catalog snapshot, vectorizes skill lists and
/// ranks projects against a user's declared skills.
///
/// Internally, it holds:
/// - The vocabulary of canonical skills
/// - A memoized skill normalizer keyed to that vocabulary
///
/// Everything else (IDF table, skill vectors, ranking) is rebuilt per call
/// from the catalog snapshot, so the matcher is deterministic and safe to
/// share between concurrent requests.
pub use matcher::SkillMatcher;

/// Vocabulary for the Skill Matcher
/// An ordered set of canonical skill names injected at matcher construction.
/// Order is significant: entry `i` defines dimension `i` of every skill
/// vector, and two vectors are only comparable when built from the same
/// vocabulary. `Vocabulary::default()` carries the production skill list.
pub use matcher::vocabulary::{Vocabulary, VocabularyError, DEFAULT_SKILLS};

/// Skill Normalizer
/// Canonicalizes free-text skill tokens against the vocabulary with
/// order-independent sub-token fuzzy matching, memoizing resolutions per
/// unique token. Unknown tokens pass through unchanged and score nothing.
pub use matcher::normalize::SkillNormalizer;

/// IDF Table
/// Per-call inverse document frequency weights over the vocabulary, derived
/// from how many catalog projects require each skill. Rebuilt fresh for
/// every matching call; never cached across calls.
pub use matcher::stats::IdfTable;

/// Skill Vector
/// A dense TF-IDF weighted vector with exactly one entry per vocabulary
/// skill, built from any raw or normalized skill list.
pub use matcher::vectorize::SkillVector;

/// Ranking and threshold policy
/// `Ranking` holds scored projects and sorts them by descending similarity;
/// `dynamic_threshold` computes the acceptance bar from the user's declared
/// skill count: `min(0.3, 0.1 + 0.01 * count)`.
pub use matcher::rank::{dynamic_threshold, Ranking, FALLBACK_LIMIT};

/// Project records
/// `ProjectRecord` is one catalog entry with an opaque passthrough payload
/// for fields the matcher does not interpret; `RankedProject` is the same
/// record annotated with its similarity score in [0, 1].
pub use matcher::project::{ProjectRecord, RankedProject};
