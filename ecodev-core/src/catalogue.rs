//! Name-based quick search over a short catalogue of common items.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::model::Category;
use crate::normalizer::normalize;

const MAX_SUGGESTIONS: usize = 3;
const POPULAR_COUNT: usize = 8;

const TIPS: [&str; 5] = [
    "Dica: separe sempre os recicláveis limpos e secos!",
    "Você sabia? A compostagem reduz 30% do lixo doméstico!",
    "Reciclando, você economiza energia e preserva recursos naturais!",
    "Pilhas e baterias contêm metais tóxicos, descarte corretamente!",
    "Cada pessoa gera cerca de 1kg de lixo por dia no Brasil!",
];

static EMBEDDED: LazyLock<Catalogue> = LazyLock::new(|| {
    let item = |id: &str,
                name: &str,
                category: Category,
                description: &str,
                disposal: &str,
                tip: &str| CatalogueItem {
        id: id.to_owned(),
        name: name.to_owned(),
        category,
        description: description.to_owned(),
        disposal: disposal.to_owned(),
        tip: tip.to_owned(),
    };

    Catalogue::new(vec![
        item(
            "1",
            "Garrafa PET",
            Category::Recyclable,
            "Material plástico 100% reciclável",
            "Descarte no contentor azul (recicláveis). Retire a tampa e lave antes do descarte.",
            "Uma garrafa PET pode virar camisetas, tapetes ou outras garrafas!",
        ),
        item(
            "2",
            "Casca de Banana",
            Category::Organic,
            "Resíduo orgânico compostável",
            "Descarte no contentor marrom (orgânicos) ou faça compostagem doméstica.",
            "Cascas de frutas viram excelente adubo natural em 60-90 dias!",
        ),
        item(
            "3",
            "Pilha",
            Category::Hazardous,
            "Contém metais pesados tóxicos",
            "Leve a pontos de coleta específicos em lojas ou postos de saúde.",
            "NUNCA descarte no lixo comum! Pode contaminar solo e água.",
        ),
        item(
            "4",
            "Papel de Bala",
            Category::General,
            "Papel metalizado não reciclável",
            "Descarte no lixo comum (contentor cinza).",
            "Papéis metalizados não podem ser reciclados devido ao revestimento.",
        ),
        item(
            "5",
            "Vidro",
            Category::Recyclable,
            "Material 100% reciclável infinitas vezes",
            "Descarte no contentor verde (vidros). Cuidado com fragmentos.",
            "O vidro pode ser reciclado infinitas vezes sem perder qualidade!",
        ),
        item(
            "6",
            "Óleo de Cozinha",
            Category::Hazardous,
            "Altamente poluente se descartado incorretamente",
            "Leve a postos de coleta. Nunca descarte na pia ou no lixo.",
            "1 litro de óleo pode contaminar até 1 milhão de litros de água!",
        ),
        item(
            "7",
            "Papelão",
            Category::Recyclable,
            "Material reciclável de alta demanda",
            "Descarte no contentor azul. Desmonte as caixas antes.",
            "Papelão molhado não pode ser reciclado. Mantenha seco!",
        ),
        item(
            "8",
            "Resto de Comida",
            Category::Organic,
            "Matéria orgânica compostável",
            "Contentor marrom ou compostagem doméstica.",
            "Restos de comida podem virar adubo rico em nutrientes!",
        ),
    ])
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Catalogue entry describing how to dispose of one well-known item.
pub struct CatalogueItem {
    /// Unique identifier.
    pub id: String,
    /// Display name, also the search key.
    pub name: String,
    /// Disposal category.
    pub category: Category,
    /// Short description.
    pub description: String,
    /// How to dispose of the item.
    pub disposal: String,
    /// Environmental tip.
    pub tip: String,
}

/// Searchable list of catalogue items.
#[derive(Debug, Clone)]
pub struct Catalogue {
    items: Vec<CatalogueItem>,
    normalized_names: Vec<String>,
}

impl Catalogue {
    /// Build a catalogue, keeping the given order.
    #[must_use]
    pub fn new(items: Vec<CatalogueItem>) -> Self {
        let normalized_names = items.iter().map(|item| normalize(&item.name)).collect();
        Self {
            items,
            normalized_names,
        }
    }

    /// The catalogue compiled into the crate.
    #[must_use]
    pub fn embedded() -> &'static Catalogue {
        &EMBEDDED
    }

    /// All items in order.
    #[must_use]
    pub fn items(&self) -> &[CatalogueItem] {
        &self.items
    }

    /// Items whose name contains `term`, ignoring case and accents.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&CatalogueItem> {
        let needle = normalize(term);
        if needle.is_empty() {
            return Vec::new();
        }
        self.indexed()
            .filter(|(name, _)| name.contains(needle.as_str()))
            .map(|(_, item)| item)
            .collect()
    }

    /// Up to three items whose name starts with `term` without being equal to it.
    ///
    /// Nothing is suggested for terms shorter than two characters.
    #[must_use]
    pub fn suggestions(&self, term: &str) -> Vec<&CatalogueItem> {
        let needle = normalize(term);
        if needle.chars().count() < 2 {
            return Vec::new();
        }
        self.indexed()
            .filter(|(name, _)| name.starts_with(needle.as_str()) && *name != needle.as_str())
            .map(|(_, item)| item)
            .take(MAX_SUGGESTIONS)
            .collect()
    }

    /// Items shown before the user types anything.
    #[must_use]
    pub fn popular(&self) -> &[CatalogueItem] {
        let count = self.items.len().min(POPULAR_COUNT);
        self.items.get(..count).unwrap_or_default()
    }

    fn indexed(&self) -> impl Iterator<Item = (&str, &CatalogueItem)> {
        self.normalized_names
            .iter()
            .map(String::as_str)
            .zip(self.items.iter())
    }
}

/// General recycling tip for the given day, cycling through a fixed list.
#[must_use]
pub fn tip_for_day(day_index: u32) -> &'static str {
    let index = usize::try_from(day_index).unwrap_or_default() % TIPS.len();
    TIPS.get(index).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&CatalogueItem]) -> Vec<String> {
        items.iter().map(|item| item.name.clone()).collect()
    }

    #[test]
    fn search_is_accent_and_case_insensitive() {
        let catalogue = Catalogue::embedded();
        assert_eq!(names(&catalogue.search("OLEO")), ["Óleo de Cozinha"]);
        assert_eq!(names(&catalogue.search("papel")), ["Papel de Bala", "Papelão"]);
        assert_eq!(
            names(&catalogue.search("de")),
            [
                "Casca de Banana",
                "Papel de Bala",
                "Óleo de Cozinha",
                "Resto de Comida",
            ]
        );
    }

    #[test]
    fn empty_term_finds_nothing() {
        assert!(Catalogue::embedded().search("").is_empty());
        assert!(Catalogue::embedded().search("  ?! ").is_empty());
    }

    #[test]
    fn suggestions_need_two_characters() {
        let catalogue = Catalogue::embedded();
        assert!(catalogue.suggestions("p").is_empty());
        assert_eq!(names(&catalogue.suggestions("pa")), ["Papel de Bala", "Papelão"]);
    }

    #[test]
    fn suggestions_skip_exact_name() {
        let catalogue = Catalogue::embedded();
        assert!(catalogue.suggestions("vidro").is_empty());
        assert_eq!(names(&catalogue.suggestions("Pilh")), ["Pilha"]);
    }

    #[test]
    fn popular_lists_first_eight() {
        assert_eq!(Catalogue::embedded().popular().len(), 8);
    }

    #[test]
    fn tips_rotate() {
        assert_eq!(tip_for_day(0), tip_for_day(5));
        assert_ne!(tip_for_day(0), tip_for_day(1));
    }
}
