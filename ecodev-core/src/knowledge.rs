//! Ordered, read-only knowledge base of waste categories.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::model::WasteCategoryEntry;
use crate::normalizer::normalize;

const EMBEDDED_JSON: &str = include_str!("../data/knowledge_base.json");

static EMBEDDED: LazyLock<KnowledgeBase> = LazyLock::new(|| {
    KnowledgeBase::from_json(EMBEDDED_JSON).expect("embedded knowledge base is valid")
});

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while building a knowledge base from external data.
pub enum KnowledgeError {
    /// Reading the source file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The document is not a valid list of entries.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// The document contains no entries.
    #[error("Knowledge base is empty")]
    Empty,
    /// An entry has no keyword left after normalization.
    #[error("Entry {index} ({name}) has no usable keyword")]
    NoKeywords {
        /// Position of the entry in the document.
        index: usize,
        /// Classification name of the entry.
        name: String,
    },
}

/// Knowledge base entry with its keywords already folded for matching.
#[derive(Debug, Clone)]
pub struct IndexedEntry {
    entry: WasteCategoryEntry,
    normalized_keywords: Vec<String>,
}

impl IndexedEntry {
    /// The entry as it was loaded.
    #[must_use]
    pub fn entry(&self) -> &WasteCategoryEntry {
        &self.entry
    }

    /// Normalized keywords in their original order.
    #[must_use]
    pub fn normalized_keywords(&self) -> &[String] {
        &self.normalized_keywords
    }
}

/// Ordered sequence of entries. Earlier entries take priority when matching.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<IndexedEntry>,
}

impl KnowledgeBase {
    /// Build a knowledge base, normalizing every keyword once.
    ///
    /// Keywords that normalize to an empty string would match any input and are dropped.
    #[must_use]
    pub fn new(entries: Vec<WasteCategoryEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| {
                let normalized_keywords = entry
                    .keywords
                    .iter()
                    .filter_map(|keyword| {
                        let folded = normalize(keyword);
                        if folded.is_empty() {
                            tracing::warn!(
                                keyword = %keyword,
                                entry = %entry.classification.name,
                                "dropping keyword that normalizes to nothing"
                            );
                            None
                        } else {
                            Some(folded)
                        }
                    })
                    .collect();
                IndexedEntry {
                    entry,
                    normalized_keywords,
                }
            })
            .collect::<Vec<_>>();

        tracing::info!(entries = entries.len(), "knowledge base built");
        Self { entries }
    }

    /// Parse a JSON array of entries.
    ///
    /// # Errors
    ///
    /// Returns a [`KnowledgeError`] when the document does not parse, is empty,
    /// or contains an entry without a usable keyword.
    pub fn from_json(json: &str) -> Result<Self, KnowledgeError> {
        let entries: Vec<WasteCategoryEntry> = serde_json::from_str(json)?;
        if entries.is_empty() {
            return Err(KnowledgeError::Empty);
        }

        let base = Self::new(entries);
        if let Some((index, indexed)) = base
            .entries
            .iter()
            .enumerate()
            .find(|(_, indexed)| indexed.normalized_keywords.is_empty())
        {
            return Err(KnowledgeError::NoKeywords {
                index,
                name: indexed.entry.classification.name.clone(),
            });
        }

        Ok(base)
    }

    /// Read and parse a JSON knowledge base from disk.
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeError::Io`] when the file cannot be read, otherwise the
    /// same errors as [`KnowledgeBase::from_json`].
    pub fn from_path(path: &Path) -> Result<Self, KnowledgeError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The knowledge base compiled into the crate.
    #[must_use]
    pub fn embedded() -> &'static KnowledgeBase {
        &EMBEDDED
    }

    /// Entries in priority order.
    #[must_use]
    pub fn entries(&self) -> &[IndexedEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the base holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[test]
    fn embedded_base_has_reference_entries_in_order() {
        let base = KnowledgeBase::embedded();
        let names: Vec<&str> = base
            .entries()
            .iter()
            .map(|indexed| indexed.entry().classification.name.as_str())
            .collect();
        assert_eq!(
            names,
            [
                "Garrafa PET",
                "Pilha/Bateria",
                "Resíduo Orgânico",
                "Papel/Papelão",
                "Vidro",
                "Metal/Alumínio",
            ]
        );

        let categories: Vec<Category> = base
            .entries()
            .iter()
            .map(|indexed| indexed.entry().classification.category)
            .collect();
        assert_eq!(
            categories,
            [
                Category::Recyclable,
                Category::Hazardous,
                Category::Organic,
                Category::Recyclable,
                Category::Recyclable,
                Category::Recyclable,
            ]
        );
    }

    #[test]
    fn keywords_are_normalized_at_load() {
        let base = KnowledgeBase::embedded();
        for indexed in base.entries() {
            assert!(
                indexed.normalized_keywords().len() >= 10,
                "{} has too few keywords",
                indexed.entry().classification.name
            );
            for keyword in indexed.normalized_keywords() {
                assert_eq!(&normalize(keyword), keyword);
            }
        }
    }

    #[test]
    fn collection_points_keep_insertion_order() {
        let base = KnowledgeBase::embedded();
        let pet = base.entries().first().expect("PET entry");
        let ids: Vec<&str> = pet
            .entry()
            .classification
            .collection_points
            .iter()
            .map(|point| point.id.0.as_str())
            .collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn rejects_empty_document() {
        let err = KnowledgeBase::from_json("[]").expect_err("empty base");
        assert!(matches!(err, KnowledgeError::Empty));
    }

    #[test]
    fn rejects_malformed_document() {
        let err = KnowledgeBase::from_json("{\"keywords\": 1}").expect_err("bad json");
        assert!(matches!(err, KnowledgeError::Parse(_)));
    }

    #[test]
    fn rejects_entry_without_usable_keywords() {
        let json = r#"[{
            "keywords": ["!!!", "  "],
            "classification": {
                "category": "general",
                "name": "Vazio",
                "description": "",
                "disposal": "",
                "tip": ""
            }
        }]"#;
        let err = KnowledgeBase::from_json(json).expect_err("no keywords");
        assert!(matches!(err, KnowledgeError::NoKeywords { index: 0, .. }));
    }
}
