use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The production skill list, sorted lexicographically.
/// Order is significant: it fixes the dimension index of every skill vector
/// built against the default vocabulary.
pub const DEFAULT_SKILLS: &[&str] = &[
    "ARM",
    "Angular",
    "C",
    "C#",
    "C++",
    "CSS",
    "Data Science",
    "Django",
    "Docker",
    "Firebase",
    "Flask",
    "Go",
    "GraphQL",
    "HTML",
    "Java",
    "JavaScript",
    "Keil",
    "Kotlin",
    "Kubernetes",
    "Machine Learning",
    "Node.js",
    "PHP",
    "PyTorch",
    "Python",
    "React",
    "Ruby on Rails",
    "Rust",
    "SQL",
    "Swift",
    "TensorFlow",
    "TypeScript",
    "Unity",
    "Vue",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VocabularyError {
    #[error("vocabulary must contain at least one skill")]
    Empty,
    #[error("duplicate vocabulary entry after case folding: {0}")]
    Duplicate(String),
}

/// Ordered set of canonical skill names.
///
/// Entry `i` defines dimension `i` of every `SkillVector` built against this
/// vocabulary, so two vectors are only comparable when they come from the
/// same `Vocabulary` value. Lookups are case-folded; the canonical casing is
/// what callers get back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Canonical entries in dimension order
    entries: Vec<Box<str>>,
    /// Case-folded entry -> dimension index
    #[serde(with = "indexmap::map::serde_seq")]
    index: IndexMap<Box<str>, usize>,
}

impl Vocabulary {
    /// Build a vocabulary from canonical skill names, preserving order.
    ///
    /// # Errors
    /// * `VocabularyError::Empty` - no entries were given
    /// * `VocabularyError::Duplicate` - two entries collide after case folding
    pub fn new<I, S>(entries: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<Box<str>> = entries
            .into_iter()
            .map(|s| s.into().into_boxed_str())
            .collect();
        if entries.is_empty() {
            return Err(VocabularyError::Empty);
        }
        let mut index = IndexMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            let folded = entry.trim().to_lowercase().into_boxed_str();
            if index.insert(folded, i).is_some() {
                return Err(VocabularyError::Duplicate(entry.to_string()));
            }
        }
        Ok(Self { entries, index })
    }

    /// Number of dimensions.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical entry at dimension `i`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&str> {
        self.entries.get(i).map(|e| e.as_ref())
    }

    /// Dimension index of a skill name, case-insensitively.
    #[inline]
    pub fn index_of(&self, skill: &str) -> Option<usize> {
        self.index.get(skill.trim().to_lowercase().as_str()).copied()
    }

    /// Dimension index of an already case-folded skill name.
    #[inline]
    pub(crate) fn index_of_folded(&self, folded: &str) -> Option<usize> {
        self.index.get(folded).copied()
    }

    /// Canonical entries in dimension order.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.as_ref())
    }

    /// `(dimension, folded form, canonical form)` triples in dimension order.
    pub(crate) fn folded_entries(&self) -> impl Iterator<Item = (usize, &str, &str)> {
        self.index
            .iter()
            .map(|(folded, &i)| (i, folded.as_ref(), self.entries[i].as_ref()))
    }
}

impl Default for Vocabulary {
    /// The production skill list. Infallible: `DEFAULT_SKILLS` is non-empty
    /// and collision-free.
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS.iter().copied()).expect("default skill list is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_entry_order_as_dimension_order() {
        let vocab = Vocabulary::new(["Python", "React", "Docker"]).unwrap();
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.get(0), Some("Python"));
        assert_eq!(vocab.get(1), Some("React"));
        assert_eq!(vocab.get(2), Some("Docker"));
    }

    #[test]
    fn index_lookup_is_case_insensitive() {
        let vocab = Vocabulary::new(["Python", "React"]).unwrap();
        assert_eq!(vocab.index_of("python"), Some(0));
        assert_eq!(vocab.index_of("REACT"), Some(1));
        assert_eq!(vocab.index_of("  Python "), Some(0));
        assert_eq!(vocab.index_of("docker"), None);
    }

    #[test]
    fn rejects_empty_vocabulary() {
        let err = Vocabulary::new(Vec::<String>::new()).unwrap_err();
        assert_eq!(err, VocabularyError::Empty);
    }

    #[test]
    fn rejects_case_folded_duplicates() {
        let err = Vocabulary::new(["Python", "PYTHON"]).unwrap_err();
        assert_eq!(err, VocabularyError::Duplicate("PYTHON".to_string()));
    }

    #[test]
    fn default_vocabulary_is_the_production_list() {
        let vocab = Vocabulary::default();
        assert_eq!(vocab.len(), DEFAULT_SKILLS.len());
        assert_eq!(vocab.get(0), Some("ARM"));
        assert_eq!(vocab.index_of("rust"), Some(26));
    }
}
