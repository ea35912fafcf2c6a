//! Natural-language rendering of SPARQL results.
//!
//! One formatter per [`ResultShape`]. Rows are read only through the
//! null-safe [`Binding`] getters, so a missing variable turns into a
//! placeholder instead of an error.

use super::category::ResultShape;
use super::query_info::QueryInfo;
use crate::sparql::binding::Binding;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Placeholder for a missing value.
pub const MISSING: &str = "N/A";

/// Payments listed individually before the remainder is summarized.
pub const MAX_LISTED_PAYMENTS: usize = 5;

/// Answer text plus the rows it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedResponse {
    pub answer: String,
    pub data: Vec<Binding>,
    #[serde(rename = "type")]
    pub shape: ResultShape,
    pub description: String,
}

/// Phrase `bindings` according to the shape recorded in `info`.
pub fn format_response(bindings: Vec<Binding>, info: &QueryInfo) -> FormattedResponse {
    FormattedResponse {
        answer: format_answer(&bindings, info.shape),
        data: bindings,
        shape: info.shape,
        description: info.description.clone(),
    }
}

/// Answer text only.
pub fn format_answer(rows: &[Binding], shape: ResultShape) -> String {
    match shape {
        ResultShape::Services => format_services(rows),
        ResultShape::Prices => format_prices(rows),
        ResultShape::Users => format_users(rows),
        ResultShape::Payments => format_payments(rows),
        ResultShape::Stats => format_stats(rows),
        ResultShape::Exams => format!("J'ai trouvé {} résultat(s).", rows.len()),
    }
}

fn service_label(row: &Binding) -> &str {
    row.non_empty("label")
        .or_else(|| row.local_name("service"))
        .unwrap_or(MISSING)
}

fn format_services(rows: &[Binding]) -> String {
    if rows.is_empty() {
        return "Je n'ai trouvé aucun service correspondant à votre recherche.".to_string();
    }

    // Grouped by class, in order of first appearance
    let mut groups: Vec<(&str, Vec<&Binding>)> = Vec::new();
    for row in rows {
        let class = row.local_name("type").unwrap_or("Autre");
        match groups.iter_mut().find(|(name, _)| *name == class) {
            Some((_, members)) => members.push(row),
            None => groups.push((class, vec![row])),
        }
    }

    let mut answer = format!("J'ai trouvé {} service(s) médical(aux):\n\n", rows.len());
    for (class, members) in groups {
        let _ = writeln!(answer, "**{}** ({}):", class, members.len());
        for row in members {
            let _ = writeln!(answer, "• {}", service_label(row));
        }
        answer.push('\n');
    }
    answer
}

fn format_prices(rows: &[Binding]) -> String {
    let Some(service) = rows.first() else {
        return "Je n'ai pas trouvé d'information de prix pour ce service.".to_string();
    };

    format!(
        "Le service **{}** coûte **{}€** (basé sur {} paiement(s) enregistré(s)).",
        service_label(service),
        service.value("montant").unwrap_or(MISSING),
        service.value("nombrePaiements").unwrap_or(MISSING),
    )
}

fn format_users(rows: &[Binding]) -> String {
    if rows.is_empty() {
        return "Aucun utilisateur trouvé.".to_string();
    }

    let mut answer = format!("Il y a {} utilisateur(s) enregistré(s):\n\n", rows.len());
    for user in rows {
        let full_name = format!(
            "{} {}",
            user.value("firstName").unwrap_or_default(),
            user.value("lastName").unwrap_or_default()
        );
        let full_name = full_name.trim();
        let detail = if full_name.is_empty() {
            user.non_empty("email").unwrap_or(MISSING)
        } else {
            full_name
        };
        let _ = writeln!(
            answer,
            "• {} ({})",
            user.value("username").unwrap_or(MISSING),
            detail
        );
    }
    answer
}

fn format_payments(rows: &[Binding]) -> String {
    if rows.is_empty() {
        return "Aucun paiement trouvé pour cet utilisateur.".to_string();
    }

    let total: f64 = rows.iter().map(|p| p.number("montant").unwrap_or(0.0)).sum();

    let mut answer = format!(
        "J'ai trouvé {} paiement(s) pour un total de **{:.2}€**:\n\n",
        rows.len(),
        total
    );
    for payment in rows.iter().take(MAX_LISTED_PAYMENTS) {
        let _ = writeln!(
            answer,
            "• {}: {}€ ({})",
            payment.value("date").unwrap_or(MISSING),
            payment.value("montant").unwrap_or(MISSING),
            payment.non_empty("status").unwrap_or(MISSING)
        );
    }

    if rows.len() > MAX_LISTED_PAYMENTS {
        let _ = write!(
            answer,
            "\n... et {} autre(s) paiement(s).",
            rows.len() - MAX_LISTED_PAYMENTS
        );
    }
    answer
}

fn format_stats(rows: &[Binding]) -> String {
    if rows.is_empty() {
        return "Aucune statistique disponible.".to_string();
    }

    let mut answer = String::from("Voici les statistiques:\n\n");
    for row in rows {
        let label = row
            .local_name("type")
            .or_else(|| row.non_empty("status"))
            .unwrap_or("Total");
        let _ = write!(
            answer,
            "• **{}**: {} élément(s)",
            label,
            row.value("count").unwrap_or(MISSING)
        );
        if let Some(total) = row.number("total") {
            let _ = write!(answer, " ({:.2}€)", total);
        }
        answer.push('\n');
    }
    answer
}
