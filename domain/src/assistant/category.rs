//! Question categories and result shapes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category a question was classified into.
///
/// Serialized with the keys the web client already understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "servicesDisponibles")]
    AvailableServices,
    #[serde(rename = "prix")]
    Prices,
    #[serde(rename = "examens")]
    Exams,
    #[serde(rename = "utilisateurs")]
    Users,
    #[serde(rename = "paiements")]
    Payments,
    #[serde(rename = "statistiques")]
    Statistics,
    /// No pattern matched; the fallback query was used.
    #[serde(rename = "unknown")]
    Unknown,
}

impl Category {
    /// The six matchable categories, in dispatch order.
    pub const ORDERED: [Category; 6] = [
        Category::AvailableServices,
        Category::Prices,
        Category::Exams,
        Category::Users,
        Category::Payments,
        Category::Statistics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::AvailableServices => "servicesDisponibles",
            Category::Prices => "prix",
            Category::Exams => "examens",
            Category::Users => "utilisateurs",
            Category::Payments => "paiements",
            Category::Statistics => "statistiques",
            Category::Unknown => "unknown",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Category::Unknown)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of the rows a generated query returns.
///
/// Selects the formatter used to phrase the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultShape {
    Services,
    Prices,
    Exams,
    Users,
    Payments,
    Stats,
}

impl ResultShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultShape::Services => "services",
            ResultShape::Prices => "prices",
            ResultShape::Exams => "exams",
            ResultShape::Users => "users",
            ResultShape::Payments => "payments",
            ResultShape::Stats => "stats",
        }
    }
}

impl fmt::Display for ResultShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_keys_round_trip_through_serde() {
        for category in Category::ORDERED.iter().chain([Category::Unknown].iter()) {
            let json = serde_json::to_string(category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn test_result_shape_lowercase() {
        assert_eq!(serde_json::to_string(&ResultShape::Payments).unwrap(), "\"payments\"");
        let shape: ResultShape = serde_json::from_str("\"exams\"").unwrap();
        assert_eq!(shape, ResultShape::Exams);
    }
}
