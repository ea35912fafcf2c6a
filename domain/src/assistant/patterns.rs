//! The question pattern table.
//!
//! An ordered list of categories, each with ordered case-insensitive regular
//! expressions and a handler turning the captured subject into a SPARQL
//! query. The table is compiled once per process and never mutated.

use super::category::Category;
use super::query_info::GeneratedQuery;
use super::templates;
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Builds the query for a matched question from its subject (possibly `""`).
pub type Handler = fn(&str) -> GeneratedQuery;

/// A regular expression and the group holding its free-text subject.
pub struct QuestionPattern {
    pub regex: Regex,
    pub subject_group: Option<usize>,
}

impl QuestionPattern {
    fn compile(pattern: &str, subject_group: Option<usize>) -> Self {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .unwrap_or_else(|e| panic!("built-in question pattern {pattern:?} is invalid: {e}"));
        Self {
            regex,
            subject_group,
        }
    }

    /// The subject captured from `question`, if the pattern matches.
    ///
    /// A pattern without a subject group, or whose group did not take part in
    /// the match, yields `""`.
    pub fn extract<'q>(&self, question: &'q str) -> Option<&'q str> {
        let caps = self.regex.captures(question)?;
        let subject = self
            .subject_group
            .and_then(|i| caps.get(i))
            .map_or("", |m| m.as_str());
        Some(subject)
    }
}

/// One category of the table.
pub struct CategoryRule {
    pub category: Category,
    pub patterns: Vec<QuestionPattern>,
    pub handler: Handler,
}

impl CategoryRule {
    fn new(category: Category, patterns: &[(&str, Option<usize>)], handler: Handler) -> Self {
        Self {
            category,
            patterns: patterns
                .iter()
                .map(|(p, group)| QuestionPattern::compile(p, *group))
                .collect(),
            handler,
        }
    }

    /// Subject from the first pattern matching `question`.
    pub fn extract<'q>(&self, question: &'q str) -> Option<&'q str> {
        self.patterns.iter().find_map(|p| p.extract(question))
    }
}

fn handle_services(condition: &str) -> GeneratedQuery {
    if condition.trim().is_empty() {
        templates::all_services()
    } else {
        templates::services_by_condition(condition)
    }
}

fn handle_users(_subject: &str) -> GeneratedQuery {
    templates::users()
}

/// The ordered `(patterns, handler)` table.
pub struct PatternTable {
    rules: Vec<CategoryRule>,
}

static STANDARD: LazyLock<PatternTable> = LazyLock::new(PatternTable::standard);

impl PatternTable {
    /// The process-wide table.
    pub fn global() -> &'static PatternTable {
        &STANDARD
    }

    /// Build the standard French question table.
    pub fn standard() -> Self {
        let rules = vec![
            CategoryRule::new(
                Category::AvailableServices,
                &[
                    (
                        r"quels?\s+(sont\s+)?les?\s+services?\s+(médicaux?\s+)?(disponibles?|proposés?)",
                        None,
                    ),
                    (r"liste\s+(des\s+)?services?\s+médicaux?", None),
                    (r"services?\s+(pour|concernant|relatifs?\s+à)\s+(.+)", Some(2)),
                ],
                handle_services,
            ),
            CategoryRule::new(
                Category::Prices,
                &[
                    (r"combien\s+coûte\s+(.+)", Some(1)),
                    (r"quel\s+est\s+le\s+(prix|coût|tarif)\s+(de\s+|d'\s*|pour\s+)(.+)", Some(3)),
                    (r"prix\s+(de\s+|d'\s*|pour\s+)(.+)", Some(2)),
                    (r"tarif\s+(de\s+|d'\s*|pour\s+)(.+)", Some(2)),
                ],
                templates::price,
            ),
            CategoryRule::new(
                Category::Exams,
                &[
                    (
                        r"quels?\s+examens?\s+(sont\s+)?(inclus?|compris?|nécessaires?)\s+(dans|pour)\s+(.+)",
                        Some(4),
                    ),
                    (r"que\s+comprend\s+(.+)", Some(1)),
                    (r"contenu\s+(de\s+|d'\s*)(.+)", Some(2)),
                ],
                templates::exams,
            ),
            CategoryRule::new(
                Category::Users,
                &[
                    (r"combien\s+(de\s+|d'\s*)?(patients?|utilisateurs?)", None),
                    (r"liste\s+(des\s+)?(patients?|utilisateurs?)", None),
                    (r"qui\s+sont\s+les\s+(patients?|utilisateurs?)", None),
                ],
                handle_users,
            ),
            CategoryRule::new(
                Category::Payments,
                &[
                    (r"paiements?\s+(de|pour)\s+(.+)", Some(2)),
                    (r"historique\s+(de\s+)?paiements?\s+(de|pour)\s+(.+)", Some(3)),
                    (r"combien\s+a\s+payé\s+(.+)", Some(1)),
                    (r"total\s+(des\s+)?paiements?\s+(de|pour)\s+(.+)", Some(3)),
                ],
                templates::payments,
            ),
            CategoryRule::new(
                Category::Statistics,
                &[
                    (r"statistiques?\s+(de|des|sur)\s+(.+)", Some(2)),
                    (r"combien\s+(de\s+)?consultations?", None),
                    (r"nombre\s+(de\s+|d'\s*)(.+)", Some(2)),
                ],
                templates::stats,
            ),
        ];

        Self { rules }
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// First matching rule, in table order.
    pub fn find_match(&self, question: &str) -> Option<(Category, GeneratedQuery)> {
        self.rules.iter().find_map(|rule| {
            rule.extract(question)
                .map(|subject| (rule.category, (rule.handler)(subject)))
        })
    }
}
