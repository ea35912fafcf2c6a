//! SPARQL query templates for the SmartHealth ontology.
//!
//! Every function here is pure string construction. Captured question text
//! is normalized (lower-cased, trimmed) and passed through
//! [`escape_literal`] before it lands inside a `"..."` literal.

use super::category::ResultShape;
use super::query_info::GeneratedQuery;
use crate::sparql::escape::escape_literal;
use crate::sparql::prefixes::{PREFIX_EX, PREFIX_RDF, PREFIX_SH, SERVICE_CLASSES};

/// `FILTER(?type = sh:Consultation || ?type = sh:Analyse || ...)`
fn service_type_filter() -> String {
    let alternatives = SERVICE_CLASSES
        .iter()
        .map(|class| format!("?type = sh:{}", class))
        .collect::<Vec<_>>()
        .join(" || ");
    format!("FILTER({})", alternatives)
}

fn normalize(subject: &str) -> String {
    subject.trim().to_lowercase()
}

/// Maps condition keywords onto one of the service classes.
fn service_class_for(condition: &str) -> Option<&'static str> {
    const KEYWORDS: [(&[&str], &str); 3] = [
        (&["cardiaque", "coeur", "cardiologie"], "Consultation"),
        (&["analyse", "sang", "test"], "Analyse"),
        (&["distance", "télé", "en ligne"], "Telemedecine"),
    ];

    KEYWORDS
        .iter()
        .find(|(words, _)| words.iter().any(|w| condition.contains(w)))
        .map(|(_, class)| *class)
}

/// Every service of the three service classes.
pub fn all_services() -> GeneratedQuery {
    let query = format!(
        r#"
{PREFIX_RDF}
{PREFIX_SH}

SELECT ?service ?type ?label WHERE {{
  ?service rdf:type ?type .
  {filter}
  OPTIONAL {{ ?service sh:label ?label }}
}}
ORDER BY ?type ?service"#,
        filter = service_type_filter(),
    );

    GeneratedQuery::new(
        query,
        ResultShape::Services,
        "Liste de tous les services médicaux disponibles",
    )
}

/// Services relevant to a condition.
///
/// Known keywords narrow the service class; otherwise the label must contain
/// the condition text.
pub fn services_by_condition(condition: &str) -> GeneratedQuery {
    let normalized = normalize(condition);
    let class = service_class_for(&normalized);

    let (type_filter, label_filter) = match class {
        Some(class) => (format!("FILTER(?type = sh:{})", class), String::new()),
        None => (
            service_type_filter(),
            format!(
                r#"FILTER(CONTAINS(LCASE(STR(?label)), "{}"))"#,
                escape_literal(&normalized)
            ),
        ),
    };

    let query = format!(
        r#"
{PREFIX_RDF}
{PREFIX_SH}

SELECT ?service ?type ?label WHERE {{
  ?service rdf:type ?type .
  {type_filter}
  OPTIONAL {{ ?service sh:label ?label }}
  {label_filter}
}}
ORDER BY ?service"#
    );

    GeneratedQuery::new(
        query,
        ResultShape::Services,
        format!("Services médicaux pour: {}", condition.trim()),
    )
}

/// Price of a service, derived from the recorded payments.
pub fn price(service: &str) -> GeneratedQuery {
    let needle = escape_literal(&normalize(service));

    let query = format!(
        r#"
{PREFIX_SH}

SELECT ?service ?label ?montant (COUNT(?paiement) as ?nombrePaiements) WHERE {{
  ?paiement a sh:PaiementFacture ;
            sh:correspondÀ ?service ;
            sh:montant ?montant .
  OPTIONAL {{ ?service sh:label ?label }}
  FILTER(CONTAINS(LCASE(STR(?label)), "{needle}") || CONTAINS(LCASE(STR(?service)), "{needle}"))
}}
GROUP BY ?service ?label ?montant
ORDER BY DESC(?nombrePaiements)"#
    );

    GeneratedQuery::new(
        query,
        ResultShape::Prices,
        format!("Prix pour: {}", service.trim()),
    )
}

/// Label and description of the services matching `service`.
pub fn exams(service: &str) -> GeneratedQuery {
    let needle = escape_literal(&normalize(service));

    let query = format!(
        r#"
{PREFIX_RDF}
{PREFIX_SH}

SELECT ?service ?type ?label ?description WHERE {{
  ?service rdf:type ?type .
  {filter}
  OPTIONAL {{ ?service sh:label ?label }}
  OPTIONAL {{ ?service sh:description ?description }}
  FILTER(CONTAINS(LCASE(STR(?label)), "{needle}") || CONTAINS(LCASE(STR(?service)), "{needle}"))
}}"#,
        filter = service_type_filter(),
    );

    GeneratedQuery::new(
        query,
        ResultShape::Exams,
        format!("Détails des examens pour: {}", service.trim()),
    )
}

/// Registered users with their optional names.
pub fn users() -> GeneratedQuery {
    let query = format!(
        r#"
{PREFIX_EX}

SELECT ?username ?email ?firstName ?lastName WHERE {{
  ?user a ex:User ;
        ex:username ?username ;
        ex:email ?email .
  OPTIONAL {{ ?user ex:firstName ?firstName . }}
  OPTIONAL {{ ?user ex:lastName ?lastName . }}
}}
ORDER BY ?username"#
    );

    GeneratedQuery::new(query, ResultShape::Users, "Liste des utilisateurs/patients")
}

/// Payment history of a user.
///
/// User IRIs use underscores, so whitespace runs in the name become `_`.
pub fn payments(user: &str) -> GeneratedQuery {
    let normalized = normalize(user)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    let needle = escape_literal(&normalized);

    let query = format!(
        r#"
{PREFIX_SH}

SELECT ?paiement ?montant ?date ?service ?status WHERE {{
  ?paiement a sh:PaiementFacture ;
            sh:montant ?montant ;
            sh:datePaiement ?date .
  OPTIONAL {{ ?paiement sh:correspondÀ ?service . }}
  OPTIONAL {{ ?paiement sh:statusPaiement ?status . }}
  OPTIONAL {{ ?paiement sh:effectuéPar ?user . }}
  FILTER(CONTAINS(LCASE(STR(?user)), "{needle}"))
}}
ORDER BY DESC(?date)"#
    );

    GeneratedQuery::new(
        query,
        ResultShape::Payments,
        format!("Historique des paiements pour: {}", user.trim()),
    )
}

/// Aggregate counts.
///
/// No subject, or one about services/consultations, counts services per
/// class; a subject about payments sums payments per status. Anything else
/// lists all services.
pub fn stats(subject: &str) -> GeneratedQuery {
    let subject = normalize(subject);

    if subject.is_empty() || subject.contains("service") || subject.contains("consultation") {
        let query = format!(
            r#"
{PREFIX_RDF}
{PREFIX_SH}

SELECT ?type (COUNT(?service) as ?count) WHERE {{
  ?service rdf:type ?type .
  {filter}
}}
GROUP BY ?type
ORDER BY DESC(?count)"#,
            filter = service_type_filter(),
        );
        return GeneratedQuery::new(
            query,
            ResultShape::Stats,
            "Statistiques des services par type",
        );
    }

    if subject.contains("paiement") {
        let query = format!(
            r#"
{PREFIX_SH}

SELECT ?status (COUNT(?paiement) as ?count) (SUM(?montant) as ?total) WHERE {{
  ?paiement a sh:PaiementFacture ;
            sh:statusPaiement ?status ;
            sh:montant ?montant .
}}
GROUP BY ?status
ORDER BY DESC(?count)"#
        );
        return GeneratedQuery::new(
            query,
            ResultShape::Stats,
            "Statistiques des paiements par statut",
        );
    }

    all_services()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_services_uses_ontology_names() {
        let generated = all_services();
        assert_eq!(generated.shape, ResultShape::Services);
        assert!(generated.query.contains(PREFIX_RDF));
        assert!(generated.query.contains(PREFIX_SH));
        assert!(generated.query.contains(
            "FILTER(?type = sh:Consultation || ?type = sh:Analyse || ?type = sh:Telemedecine)"
        ));
        assert!(generated.query.contains("ORDER BY ?type ?service"));
    }

    #[test]
    fn test_condition_keyword_selects_class() {
        let generated = services_by_condition("les maladies cardiaques");
        assert!(generated.query.contains("FILTER(?type = sh:Consultation)"));
        assert!(!generated.query.contains("CONTAINS"));
        assert_eq!(
            generated.description,
            "Services médicaux pour: les maladies cardiaques"
        );

        let online = services_by_condition("consultation en ligne");
        assert!(online.query.contains("FILTER(?type = sh:Telemedecine)"));
    }

    #[test]
    fn test_unmapped_condition_filters_on_label() {
        let generated = services_by_condition("Le Diabète");
        assert!(generated.query.contains(r#"CONTAINS(LCASE(STR(?label)), "le diabète")"#));
    }

    #[test]
    fn test_price_query_normalizes_subject() {
        let generated = price("  Une Consultation  ");
        assert_eq!(generated.shape, ResultShape::Prices);
        assert!(generated.query.contains(r#""une consultation""#));
        assert!(generated.query.contains("sh:correspondÀ ?service"));
        assert!(generated.query.contains("?nombrePaiements"));
        assert_eq!(generated.description, "Prix pour: Une Consultation");
    }

    #[test]
    fn test_payments_query_underscores_names() {
        let generated = payments("Nawrasse  Elbenna");
        assert!(generated.query.contains(r#""nawrasse_elbenna""#));
        assert!(generated.query.contains("sh:effectuéPar ?user"));
        assert!(generated.query.contains("sh:datePaiement ?date"));
    }

    #[test]
    fn test_injection_is_escaped() {
        let generated = exams(r#"x")) } DROP ALL #"#);
        assert!(generated.query.contains(r#""x\")) } drop all #""#));
        assert!(!generated.query.contains(r#""x"))"#));
    }

    #[test]
    fn test_stats_variants() {
        assert!(stats("").query.contains("COUNT(?service)"));
        assert!(stats("des Services").query.contains("COUNT(?service)"));
        let payments = stats("paiements par statut");
        assert!(payments.query.contains("SUM(?montant)"));
        assert_eq!(payments.description, "Statistiques des paiements par statut");
        assert_eq!(stats("médecins").description, all_services().description);
    }

    #[test]
    fn test_users_query() {
        let generated = users();
        assert_eq!(generated.shape, ResultShape::Users);
        assert!(generated.query.contains(PREFIX_EX));
        assert!(generated.query.contains("?user a ex:User"));
    }
}
