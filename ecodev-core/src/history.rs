//! In-memory submission history used by the demo front-end.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::model::{Category, Submission, SubmissionId, UserId};
use crate::normalizer::normalize;
use crate::ports::Classifier;

/// Descriptions and timestamps of the demo history, newest first.
const DEMO_ENTRIES: [(&str, &str, (i32, u32, u32, u32, u32)); 3] = [
    ("1", "garrafa de plástico transparente", (2024, 1, 15, 10, 30)),
    ("2", "pilha AA usada", (2024, 1, 14, 15, 45)),
    ("3", "casca de banana", (2024, 1, 13, 9, 20)),
];

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
/// Errors returned by history lookups.
pub enum HistoryError {
    /// No submission with the requested id.
    #[error("Submission not found: {0}")]
    NotFound(String),
}

#[derive(Debug, Clone, Default)]
/// Criteria for narrowing down the history list.
pub struct HistoryFilter {
    /// Text matched against the description and classification name.
    pub term: String,
    /// Restrict to one category; `None` keeps all.
    pub category: Option<Category>,
}

impl HistoryFilter {
    fn matches(&self, submission: &Submission) -> bool {
        let wanted_category = self
            .category
            .is_none_or(|category| submission.classification.category == category);

        let needle = normalize(&self.term);
        let wanted_text = needle.is_empty()
            || normalize(&submission.description).contains(needle.as_str())
            || normalize(&submission.classification.name).contains(needle.as_str());

        wanted_category && wanted_text
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
/// Per-category counts over the whole history.
pub struct HistoryStats {
    /// Number of submissions.
    pub total: usize,
    /// Recyclable submissions.
    pub recyclable: usize,
    /// Organic submissions.
    pub organic: usize,
    /// Hazardous submissions.
    pub hazardous: usize,
    /// General waste submissions.
    pub general: usize,
}

/// Read-only list of past submissions.
#[derive(Debug, Clone, Default)]
pub struct History {
    submissions: Vec<Submission>,
}

impl History {
    /// Wrap an existing list of submissions.
    #[must_use]
    pub fn new(submissions: Vec<Submission>) -> Self {
        Self { submissions }
    }

    /// Demo history for user `"1"`, classified with `classifier`.
    #[must_use]
    pub fn demo(classifier: &dyn Classifier) -> Self {
        let submissions = DEMO_ENTRIES
            .iter()
            .map(|(id, description, (year, month, day, hour, minute))| Submission {
                id: SubmissionId((*id).to_owned()),
                user_id: UserId("1".to_owned()),
                description: (*description).to_owned(),
                image_path: None,
                classification: classifier.classify(description),
                created_at: NaiveDate::from_ymd_opt(*year, *month, *day)
                    .and_then(|date| date.and_hms_opt(*hour, *minute, 0))
                    .unwrap_or_default(),
            })
            .collect();
        Self::new(submissions)
    }

    /// All submissions, newest first.
    #[must_use]
    pub fn all(&self) -> &[Submission] {
        &self.submissions
    }

    /// Submissions passing `filter`, in history order.
    #[must_use]
    pub fn filter(&self, filter: &HistoryFilter) -> Vec<&Submission> {
        self.submissions
            .iter()
            .filter(|submission| filter.matches(submission))
            .collect()
    }

    /// Look up a submission by id.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NotFound`] for unknown ids.
    pub fn get(&self, id: &SubmissionId) -> Result<&Submission, HistoryError> {
        self.submissions
            .iter()
            .find(|submission| &submission.id == id)
            .ok_or_else(|| HistoryError::NotFound(id.0.clone()))
    }

    /// Count submissions per category.
    #[must_use]
    pub fn stats(&self) -> HistoryStats {
        self.submissions
            .iter()
            .fold(HistoryStats::default(), |mut stats, submission| {
                stats.total += 1;
                match submission.classification.category {
                    Category::Recyclable => stats.recyclable += 1,
                    Category::Organic => stats.organic += 1,
                    Category::Hazardous => stats.hazardous += 1,
                    Category::General => stats.general += 1,
                }
                stats
            })
    }

    /// Timestamp of the newest submission.
    #[must_use]
    pub fn latest(&self) -> Option<NaiveDateTime> {
        self.submissions
            .iter()
            .map(|submission| submission.created_at)
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::Matcher;

    fn demo() -> History {
        History::demo(&Matcher::embedded())
    }

    #[test]
    fn demo_entries_are_classified() {
        let history = demo();
        let names: Vec<&str> = history
            .all()
            .iter()
            .map(|submission| submission.classification.name.as_str())
            .collect();
        assert_eq!(names, ["Garrafa PET", "Pilha/Bateria", "Resíduo Orgânico"]);
    }

    #[test]
    fn filter_by_term_checks_description_and_name() {
        let history = demo();

        let by_description = HistoryFilter {
            term: "USADA".to_owned(),
            category: None,
        };
        assert_eq!(history.filter(&by_description).len(), 1);

        let by_name = HistoryFilter {
            term: "orgânico".to_owned(),
            category: None,
        };
        let found = history.filter(&by_name);
        assert_eq!(found.len(), 1);
        assert_eq!(found.first().map(|sub| sub.id.0.as_str()), Some("3"));
    }

    #[test]
    fn filter_by_category_and_empty_term() {
        let history = demo();
        assert_eq!(history.filter(&HistoryFilter::default()).len(), 3);

        let hazardous = HistoryFilter {
            term: String::new(),
            category: Some(Category::Hazardous),
        };
        assert_eq!(history.filter(&hazardous).len(), 1);

        let none = HistoryFilter {
            term: "garrafa".to_owned(),
            category: Some(Category::Organic),
        };
        assert!(history.filter(&none).is_empty());
    }

    #[test]
    fn stats_count_each_category() {
        let stats = demo().stats();
        assert_eq!(
            stats,
            HistoryStats {
                total: 3,
                recyclable: 1,
                organic: 1,
                hazardous: 1,
                general: 0,
            }
        );
    }

    #[test]
    fn get_reports_unknown_ids() {
        let history = demo();
        assert!(history.get(&SubmissionId("2".to_owned())).is_ok());
        assert_eq!(
            history.get(&SubmissionId("42".to_owned())),
            Err(HistoryError::NotFound("42".to_owned()))
        );
    }

    #[test]
    fn latest_is_newest_timestamp() {
        let latest = demo().latest().expect("history not empty");
        assert_eq!(latest.to_string(), "2024-01-15 10:30:00");
    }
}
