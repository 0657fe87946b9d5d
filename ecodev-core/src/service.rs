//! High-level service facade used by front-ends.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};

use crate::auth::{self, AuthError};
use crate::catalogue::Catalogue;
use crate::history::History;
use crate::matcher::Matcher;
use crate::model::{Classification, Submission, SubmissionId, User};
use crate::ports::Classifier;

/// Public entry point for signing in, classifying waste, and browsing history.
pub struct EcoDevService {
    classifier: Arc<dyn Classifier>,
    history: History,
    catalogue: &'static Catalogue,
}

impl EcoDevService {
    /// Create a service backed by `classifier`. The demo history is classified with it.
    #[must_use]
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        let history = History::demo(classifier.as_ref());
        Self {
            classifier,
            history,
            catalogue: Catalogue::embedded(),
        }
    }

    /// Service over the embedded knowledge base.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(Arc::new(Matcher::embedded()))
    }

    /// Sign in with the stub authenticator.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredentials`] when either field is blank.
    pub fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        auth::login(email, password)
    }

    /// Classify a free-text description.
    #[must_use]
    pub fn classify(&self, description: &str) -> Classification {
        self.classifier.classify(description)
    }

    /// Classify `description` for `user`, stamped with the current local time.
    ///
    /// The submission is returned to the caller and not stored.
    #[must_use]
    pub fn submit(&self, user: &User, description: &str, image_path: Option<String>) -> Submission {
        self.submit_at(user, description, image_path, Local::now().naive_local())
    }

    /// Same as [`EcoDevService::submit`] with an explicit timestamp.
    #[must_use]
    pub fn submit_at(
        &self,
        user: &User,
        description: &str,
        image_path: Option<String>,
        created_at: NaiveDateTime,
    ) -> Submission {
        let classification = self.classify(description);
        tracing::info!(
            user = %user.id.0,
            category = %classification.category,
            name = %classification.name,
            has_image = image_path.is_some(),
            "submission classified"
        );
        Submission {
            id: SubmissionId(created_at.and_utc().timestamp_millis().to_string()),
            user_id: user.id.clone(),
            description: description.to_owned(),
            image_path,
            classification,
            created_at,
        }
    }

    /// Demo submission history.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Quick-search catalogue.
    #[must_use]
    pub fn catalogue(&self) -> &Catalogue {
        self.catalogue
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::Category;

    struct AlwaysGeneral;

    impl Classifier for AlwaysGeneral {
        fn classify(&self, _description: &str) -> Classification {
            crate::matcher::fallback()
        }
    }

    #[test]
    fn submit_classifies_and_keeps_image_path() {
        let service = EcoDevService::embedded();
        let user = service.login("ana@example.com", "senha").expect("login");
        let at = NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .expect("valid timestamp");

        let submission =
            service.submit_at(&user, "pote de vidro", Some("fotos/pote.jpg".to_owned()), at);

        assert_eq!(submission.classification.name, "Vidro");
        assert_eq!(submission.user_id, user.id);
        assert_eq!(submission.image_path.as_deref(), Some("fotos/pote.jpg"));
        assert_eq!(submission.created_at, at);
    }

    #[test]
    fn history_uses_injected_classifier() {
        let service = EcoDevService::new(Arc::new(AlwaysGeneral));
        assert_eq!(service.history().stats().general, 3);
        assert_eq!(service.classify("garrafa").category, Category::General);
    }
}
