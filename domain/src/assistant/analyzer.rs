//! Question dispatcher: free text in, [`QueryInfo`] out.

use super::category::Category;
use super::patterns::PatternTable;
use super::query_info::QueryInfo;
use super::templates;

/// Description used when no pattern matched.
pub const FALLBACK_DESCRIPTION: &str =
    "Question non reconnue - affichage des services disponibles";

/// Reformulation hint attached to unrecognized questions.
pub const FALLBACK_SUGGESTION: &str = "Essayez de reformuler votre question. Exemples: \
\"Quels sont les services disponibles ?\", \
\"Combien coûte une consultation ?\", \
\"Quels examens pour un check-up ?\"";

/// Turns a question into the SPARQL query that answers it.
///
/// Implementations must never fail: an unrecognized question still yields a
/// usable [`QueryInfo`].
pub trait QuestionClassifier: Send + Sync {
    fn classify(&self, question: &str) -> QueryInfo;
}

impl QuestionClassifier for PatternTable {
    /// First match wins; otherwise the "all services" query plus a suggestion.
    fn classify(&self, question: &str) -> QueryInfo {
        match self.find_match(question.trim()) {
            Some((category, generated)) => QueryInfo::matched(category, generated, question),
            None => fallback(question),
        }
    }
}

fn fallback(question: &str) -> QueryInfo {
    let generated = templates::all_services();
    QueryInfo {
        category: Category::Unknown,
        query: generated.query,
        shape: generated.shape,
        description: FALLBACK_DESCRIPTION.to_string(),
        original_question: question.to_string(),
        suggestion: Some(FALLBACK_SUGGESTION.to_string()),
    }
}

/// Classify `question` with the process-wide [`PatternTable`].
pub fn analyze_question(question: &str) -> QueryInfo {
    PatternTable::global().classify(question)
}

/// [`QuestionClassifier`] backed by the process-wide table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardClassifier;

impl QuestionClassifier for StandardClassifier {
    fn classify(&self, question: &str) -> QueryInfo {
        analyze_question(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::category::ResultShape;

    fn category_of(question: &str) -> Category {
        analyze_question(question).category
    }

    #[test]
    fn test_each_category_has_a_representative_question() {
        assert_eq!(
            category_of("Quels sont les services médicaux disponibles ?"),
            Category::AvailableServices
        );
        assert_eq!(
            category_of("Liste des services pour les maladies cardiaques"),
            Category::AvailableServices
        );
        assert_eq!(
            category_of("Quel est le prix d'une analyse sanguine ?"),
            Category::Prices
        );
        assert_eq!(
            category_of("Quels examens sont inclus dans un check-up complet ?"),
            Category::Exams
        );
        assert_eq!(category_of("Qui sont les patients ?"), Category::Users);
        assert_eq!(
            category_of("Historique des paiements de nawrasse_elbenna"),
            Category::Payments
        );
        assert_eq!(category_of("Combien de consultations ?"), Category::Statistics);
    }

    #[test]
    fn test_price_question_interpolates_lowercased_subject() {
        let info = analyze_question("Combien coûte une consultation en cardiologie ?");
        assert_eq!(info.category, Category::Prices);
        assert_eq!(info.shape, ResultShape::Prices);
        assert!(info.query.contains("une consultation en cardiologie"));
        assert!(info.suggestion.is_none());
        assert_eq!(
            info.original_question,
            "Combien coûte une consultation en cardiologie ?"
        );
    }

    #[test]
    fn test_subject_comes_from_free_text_tail() {
        let info = analyze_question("Tarif pour une Téléconsultation");
        assert!(info.query.contains(r#""une téléconsultation""#));
        assert!(!info.query.contains(r#""pour""#));

        let info = analyze_question("Combien a payé Jean Dupont");
        assert!(info.query.contains(r#""jean_dupont""#));
    }

    #[test]
    fn test_empty_question_falls_back() {
        let info = analyze_question("");
        assert_eq!(info.category, Category::Unknown);
        assert!(info.is_fallback());
        assert_eq!(info.shape, ResultShape::Services);
        assert_eq!(info.query, templates::all_services().query);
        assert!(!info.suggestion.as_deref().unwrap_or_default().is_empty());
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored_for_matching() {
        let info = analyze_question("   \n Liste des utilisateurs \t");
        assert_eq!(info.category, Category::Users);
        assert_eq!(info.original_question, "   \n Liste des utilisateurs \t");
    }

    #[test]
    fn test_special_characters_never_break_classification() {
        for question in ["\"", "\\", "\n\n", "{ } . ;", "Combien coûte \\\"", "é\u{0}ü"] {
            let info = analyze_question(question);
            assert!(!info.query.is_empty());
        }
    }

    /// Quotes not preceded by a backslash; must pair up in a well-formed query.
    fn unescaped_quotes(query: &str) -> usize {
        let mut count = 0;
        let mut escaped = false;
        for c in query.chars() {
            match c {
                '\\' if !escaped => escaped = true,
                '"' if !escaped => count += 1,
                _ => escaped = false,
            }
            if c != '\\' {
                escaped = false;
            }
        }
        count
    }

    #[test]
    fn test_quoted_subject_is_escaped() {
        let info = analyze_question(r#"Combien coûte "test""#);
        assert_eq!(info.category, Category::Prices);
        assert!(info.query.contains(r#"CONTAINS(LCASE(STR(?label)), "\"test\"")"#));
        assert_eq!(unescaped_quotes(&info.query) % 2, 0);
    }

    #[test]
    fn test_unescaped_quote_counter() {
        assert_eq!(unescaped_quotes(r#""a""#), 2);
        assert_eq!(unescaped_quotes(r#""a\"b""#), 2);
        assert_eq!(unescaped_quotes(r#""a\\""#), 2);
    }
}
