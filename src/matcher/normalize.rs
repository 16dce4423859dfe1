use std::sync::Arc;

use ahash::RandomState;
use dashmap::DashMap;
use strsim::jaro_winkler;
use tracing::trace;

use super::vocabulary::Vocabulary;

/// Minimum fuzzy score a vocabulary entry must exceed to win a raw token.
const ACCEPT_SCORE: f64 = 0.8;

/// Canonicalizes free-text skill tokens against a vocabulary.
///
/// A token is trimmed and case-folded, then resolved to the closest
/// vocabulary entry by order-independent sub-token fuzzy matching. Tokens
/// that resolve nowhere pass through unchanged; they will never hit a
/// vector dimension and score nothing, which is the intended degradation
/// for junk input.
///
/// Resolutions are memoized per unique folded token. The cache is a pure
/// optimization keyed to one vocabulary value; `SkillMatcher` discards the
/// whole normalizer when its vocabulary is swapped, so stale entries cannot
/// survive a vocabulary change. Concurrent readers are safe: a racing miss
/// recomputes the same value and the second insert is a no-op in effect.
#[derive(Debug)]
pub struct SkillNormalizer {
    vocabulary: Arc<Vocabulary>,
    cache: DashMap<Box<str>, Box<str>, RandomState>,
}

impl SkillNormalizer {
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        Self {
            vocabulary,
            cache: DashMap::with_hasher(RandomState::new()),
        }
    }

    /// Map a raw token to its canonical vocabulary entry, or return the
    /// trimmed, case-folded token unchanged when nothing scores above the
    /// acceptance bar. Never fails.
    pub fn normalize(&self, raw: &str) -> String {
        let folded = raw.trim().to_lowercase();
        if let Some(hit) = self.cache.get(folded.as_str()) {
            return hit.to_string();
        }
        let resolved = self.resolve(&folded);
        self.cache
            .insert(folded.into_boxed_str(), resolved.clone().into_boxed_str());
        resolved
    }

    /// Normalize every entry of a skill list, preserving order and
    /// duplicates.
    pub fn normalize_each(&self, skills: &[String]) -> Vec<String> {
        skills.iter().map(|s| self.normalize(s)).collect()
    }

    /// Number of distinct raw tokens memoized so far.
    pub fn cached_tokens(&self) -> usize {
        self.cache.len()
    }

    fn resolve(&self, folded: &str) -> String {
        // exact case-folded hit, the common path
        if let Some(i) = self.vocabulary.index_of_folded(folded) {
            return self.vocabulary.get(i).unwrap_or(folded).to_string();
        }
        let subject = sort_sub_tokens(folded);
        let mut best: Option<(&str, f64)> = None;
        for (_, entry_folded, canonical) in self.vocabulary.folded_entries() {
            let score = jaro_winkler(&subject, &sort_sub_tokens(entry_folded));
            match best {
                Some((_, s)) if s >= score => {}
                _ => best = Some((canonical, score)),
            }
        }
        match best {
            Some((canonical, score)) if score > ACCEPT_SCORE => {
                trace!(raw = folded, canonical, score, "fuzzy-resolved skill token");
                canonical.to_string()
            }
            _ => folded.to_string(),
        }
    }
}

/// Rebuild a phrase with its whitespace-separated sub-tokens sorted, so
/// "learning machine" and "machine learning" compare equal.
fn sort_sub_tokens(s: &str) -> String {
    let mut parts: Vec<&str> = s.split_whitespace().collect();
    parts.sort_unstable();
    parts.join(" ")
}
