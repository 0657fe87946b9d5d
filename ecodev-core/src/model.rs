//! Domain data structures for waste categories, classifications, and collection points.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Disposal category a classification falls into.
pub enum Category {
    /// Recyclable material (plastic, paper, glass, metal).
    Recyclable,
    /// Compostable organic waste.
    Organic,
    /// Hazardous waste that needs a dedicated drop-off.
    Hazardous,
    /// Residual waste for the general bin.
    General,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Recyclable,
        Category::Organic,
        Category::Hazardous,
        Category::General,
    ];

    /// Localized display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Recyclable => "Reciclável",
            Category::Organic => "Orgânico",
            Category::Hazardous => "Perigoso",
            Category::General => "Lixo Comum",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slug = match self {
            Category::Recyclable => "recyclable",
            Category::Organic => "organic",
            Category::Hazardous => "hazardous",
            Category::General => "general",
        };
        write!(formatter, "{slug}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identifier for a collection point.
pub struct CollectionPointId(pub String);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Physical drop-off location accepting certain materials.
pub struct CollectionPoint {
    /// Unique identifier.
    pub id: CollectionPointId,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
    /// Accepted material labels, in display order.
    pub accepted_types: Vec<String>,
    /// Opening hours as free text.
    pub hours: String,
    /// Optional contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Result of classifying a waste description.
pub struct Classification {
    /// Disposal category.
    pub category: Category,
    /// Display name of the identified item.
    pub name: String,
    /// Short description of the material.
    pub description: String,
    /// How to dispose of the item.
    pub disposal: String,
    /// Environmental tip shown with the result.
    pub tip: String,
    /// Collection points accepting the item, in knowledge base order.
    #[serde(default)]
    pub collection_points: Vec<CollectionPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Knowledge base row pairing keyword variants with one classification.
pub struct WasteCategoryEntry {
    /// Keywords and synonyms, matched after normalization.
    pub keywords: Vec<String>,
    /// Classification returned when one of the keywords matches.
    pub classification: Classification,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identifier for a user.
pub struct UserId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Signed-in user.
pub struct User {
    /// Unique identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// E-mail used to sign in.
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identifier for a submission.
pub struct SubmissionId(pub String);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A classified waste description sent by a user.
pub struct Submission {
    /// Unique identifier.
    pub id: SubmissionId,
    /// User that sent the description.
    pub user_id: UserId,
    /// Free-text description as typed.
    pub description: String,
    /// Optional path of an attached photo. Not used for classification.
    #[serde(default)]
    pub image_path: Option<String>,
    /// Classification derived from the description.
    pub classification: Classification,
    /// Local time the submission was made.
    pub created_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Hazardous).expect("serialize category");
        assert_eq!(json, "\"hazardous\"");

        let parsed: Category = serde_json::from_str("\"general\"").expect("parse category");
        assert_eq!(parsed, Category::General);
    }

    #[test]
    fn category_display_matches_serde_tag() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).expect("serialize category");
            assert_eq!(json, format!("\"{category}\""), "tag mismatch for {category:?}");
        }
    }

    #[test]
    fn collection_point_phone_is_optional() {
        let json = r#"{
            "id": "4",
            "name": "Horta Comunitária",
            "address": "Praça Verde, s/n",
            "lat": -23.5495,
            "lng": -46.632,
            "accepted_types": ["Orgânicos"],
            "hours": "Seg-Dom: 6h-18h"
        }"#;
        let point: CollectionPoint = serde_json::from_str(json).expect("parse point");
        assert_eq!(point.phone, None);
        assert_eq!(point.id, CollectionPointId("4".to_owned()));
    }
}
