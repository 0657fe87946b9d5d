//! First-match keyword classifier over a [`KnowledgeBase`].

use std::sync::LazyLock;

use crate::knowledge::KnowledgeBase;
use crate::model::{Category, Classification, CollectionPoint, CollectionPointId};
use crate::normalizer::normalize;
use crate::ports::Classifier;

static FALLBACK: LazyLock<Classification> = LazyLock::new(|| Classification {
    category: Category::General,
    name: "Item não identificado".to_owned(),
    description: "Não foi possível identificar especificamente este resíduo com base na \
                  descrição fornecida."
        .to_owned(),
    disposal: "Descarte no lixo comum (contentor cinza) até obter mais informações \
               específicas sobre o tipo de material."
        .to_owned(),
    tip: "Para uma classificação mais precisa, seja mais específico na descrição \
          (ex: \"garrafa PET transparente\", \"pilha AA\", \"casca de banana\") ou consulte \
          os órgãos ambientais locais."
        .to_owned(),
    collection_points: vec![CollectionPoint {
        id: CollectionPointId("5".to_owned()),
        name: "Central de Atendimento Ambiental".to_owned(),
        address: "Rua da Sustentabilidade, 100 - Centro".to_owned(),
        lat: -23.55,
        lng: -46.633,
        accepted_types: vec![
            "Consultas gerais".to_owned(),
            "Identificação de resíduos".to_owned(),
        ],
        hours: "Seg-Sex: 8h-17h".to_owned(),
        phone: Some("(65) 0800-MEIO-AMBIENTE".to_owned()),
    }],
});

/// Classification returned when no keyword matches.
#[must_use]
pub fn fallback() -> Classification {
    FALLBACK.clone()
}

/// Classify `description` against the embedded knowledge base.
#[must_use]
pub fn classify(description: &str) -> Classification {
    Matcher::embedded().classify(description)
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Which entry and keyword decided a match.
pub struct MatchInfo {
    /// Index of the entry in the knowledge base.
    pub entry_index: usize,
    /// Normalized keyword found in the description.
    pub keyword: String,
}

/// Matcher bound to a knowledge base.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'kb> {
    base: &'kb KnowledgeBase,
}

impl Matcher<'static> {
    /// Matcher over the embedded knowledge base.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(KnowledgeBase::embedded())
    }
}

impl<'kb> Matcher<'kb> {
    /// Create a matcher reading from `base`.
    #[must_use]
    pub fn new(base: &'kb KnowledgeBase) -> Self {
        Self { base }
    }

    /// Knowledge base this matcher reads from.
    #[must_use]
    pub fn knowledge_base(&self) -> &'kb KnowledgeBase {
        self.base
    }

    /// Find the first entry, in base order, with a keyword contained in the
    /// normalized description. Keywords are tried in their listed order.
    #[must_use]
    pub fn explain(&self, description: &str) -> Option<MatchInfo> {
        let text = normalize(description);
        if text.is_empty() {
            return None;
        }

        self.base
            .entries()
            .iter()
            .enumerate()
            .find_map(|(entry_index, indexed)| {
                indexed
                    .normalized_keywords()
                    .iter()
                    .find(|keyword| text.contains(keyword.as_str()))
                    .map(|keyword| MatchInfo {
                        entry_index,
                        keyword: keyword.clone(),
                    })
            })
    }

    /// Classify `description`, falling back to [`fallback`] when nothing matches.
    #[must_use]
    pub fn classify(&self, description: &str) -> Classification {
        let Some(info) = self.explain(description) else {
            tracing::debug!(description = %description, "no keyword matched, using fallback");
            return fallback();
        };

        match self.base.entries().get(info.entry_index) {
            Some(indexed) => {
                let classification = &indexed.entry().classification;
                tracing::debug!(
                    description = %description,
                    keyword = %info.keyword,
                    entry = info.entry_index,
                    name = %classification.name,
                    "description classified"
                );
                classification.clone()
            }
            None => fallback(),
        }
    }
}

impl Classifier for Matcher<'_> {
    fn classify(&self, description: &str) -> Classification {
        Matcher::classify(self, description)
    }
}

/// Matcher that owns its knowledge base, for bases loaded at runtime.
#[derive(Debug, Clone)]
pub struct OwnedMatcher {
    base: KnowledgeBase,
}

impl OwnedMatcher {
    /// Take ownership of `base`.
    #[must_use]
    pub fn new(base: KnowledgeBase) -> Self {
        Self { base }
    }

    /// Borrowing matcher over the owned base.
    #[must_use]
    pub fn matcher(&self) -> Matcher<'_> {
        Matcher::new(&self.base)
    }
}

impl Classifier for OwnedMatcher {
    fn classify(&self, description: &str) -> Classification {
        self.matcher().classify(description)
    }
}
