//! SPARQL 1.1 JSON result rows.
//!
//! A [`Binding`] is one solution of a `SELECT` query: a loosely typed map from
//! variable name to [`BindingValue`]. Rows are passed through untouched; the
//! only access path is the null-safe [`Binding::value`] getter, so missing
//! variables (unbound `OPTIONAL`s, renamed projections) never cause a failure.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single RDF term as serialized in `application/sparql-results+json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingValue {
    /// Lexical value of the term (URI, literal text or blank node label).
    pub value: String,
    /// Term kind: `uri`, `literal`, `typed-literal` or `bnode`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    #[serde(rename = "xml:lang", default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl BindingValue {
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: Some("literal".to_string()),
            datatype: None,
            lang: None,
        }
    }

    pub fn uri(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: Some("uri".to_string()),
            datatype: None,
            lang: None,
        }
    }

    /// Text after the last `#`, or the whole value when there is none.
    ///
    /// Returns `None` for an empty fragment (`http://x#`).
    pub fn local_name(&self) -> Option<&str> {
        self.value
            .rsplit('#')
            .next()
            .filter(|fragment| !fragment.is_empty())
    }
}

/// One row of a SPARQL result set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Binding(BTreeMap<String, BindingValue>);

impl Binding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly useful for fixtures.
    pub fn with(mut self, variable: impl Into<String>, value: BindingValue) -> Self {
        self.insert(variable, value);
        self
    }

    pub fn insert(&mut self, variable: impl Into<String>, value: BindingValue) {
        self.0.insert(variable.into(), value);
    }

    pub fn get(&self, variable: &str) -> Option<&BindingValue> {
        self.0.get(variable)
    }

    /// Lexical value of `variable`, if bound.
    pub fn value(&self, variable: &str) -> Option<&str> {
        self.get(variable).map(|v| v.value.as_str())
    }

    /// Like [`value`](Self::value) but treats an empty string as unbound.
    pub fn non_empty(&self, variable: &str) -> Option<&str> {
        self.value(variable).filter(|v| !v.is_empty())
    }

    /// URI fragment of `variable` (see [`BindingValue::local_name`]).
    pub fn local_name(&self, variable: &str) -> Option<&str> {
        self.get(variable).and_then(BindingValue::local_name)
    }

    /// Numeric value of `variable`, if bound and parseable as a finite float.
    pub fn number(&self, variable: &str) -> Option<f64> {
        self.value(variable)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|n| n.is_finite())
    }

    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, BindingValue)> for Binding {
    fn from_iter<I: IntoIterator<Item = (String, BindingValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_variable_is_none() {
        let row = Binding::new().with("label", BindingValue::literal("Cardiologie"));
        assert_eq!(row.value("label"), Some("Cardiologie"));
        assert_eq!(row.value("montant"), None);
        assert_eq!(row.local_name("type"), None);
        assert_eq!(row.number("montant"), None);
    }

    #[test]
    fn test_local_name() {
        let row = Binding::new()
            .with(
                "type",
                BindingValue::uri("http://www.smarthealth-tracker.com/ontologie#Consultation"),
            )
            .with("plain", BindingValue::literal("no-fragment"))
            .with("empty", BindingValue::uri("http://example.org/x#"));

        assert_eq!(row.local_name("type"), Some("Consultation"));
        assert_eq!(row.local_name("plain"), Some("no-fragment"));
        assert_eq!(row.local_name("empty"), None);
    }

    #[test]
    fn test_number_parsing() {
        let row = Binding::new()
            .with("a", BindingValue::literal(" 20.5 "))
            .with("b", BindingValue::literal("abc"))
            .with("c", BindingValue::literal("NaN"));

        assert_eq!(row.number("a"), Some(20.5));
        assert_eq!(row.number("b"), None);
        assert_eq!(row.number("c"), None);
    }

    #[test]
    fn test_deserialize_sparql_json_row() {
        let json = r#"{
            "montant": {"type": "literal", "datatype": "http://www.w3.org/2001/XMLSchema#decimal", "value": "45.00"},
            "label": {"type": "literal", "xml:lang": "fr", "value": "Bilan sanguin"}
        }"#;

        let row: Binding = serde_json::from_str(json).unwrap();
        assert_eq!(row.len(), 2);
        assert_eq!(row.value("montant"), Some("45.00"));
        assert_eq!(row.get("label").unwrap().lang.as_deref(), Some("fr"));
        assert_eq!(
            row.get("montant").unwrap().kind.as_deref(),
            Some("literal")
        );
    }

    #[test]
    fn test_value_without_type_is_accepted() {
        let row: Binding = serde_json::from_str(r#"{"count": {"value": "3"}}"#).unwrap();
        assert_eq!(row.number("count"), Some(3.0));
        assert!(row.get("count").unwrap().kind.is_none());
    }
}
