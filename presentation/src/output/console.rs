//! Console output formatter for assistant answers

use assistant_application::{AskQuestionError, AssistantAnswer, EndpointStatus};
use assistant_domain::{Binding, Capabilities, ExampleGroup, OutputFormat};
use colored::Colorize;

/// Rows shown in full output before eliding the rest
const MAX_DISPLAYED_ROWS: usize = 10;

/// Formats assistant answers for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render an answer in the requested format
    pub fn render(answer: &AssistantAnswer, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(answer),
            OutputFormat::Answer => Self::format_answer_only(answer),
            OutputFormat::Json => Self::format_json(answer),
        }
    }

    /// Format the complete answer with classification and rows
    pub fn format(answer: &AssistantAnswer) -> String {
        let info = &answer.query_info;
        let mut output = String::new();

        output.push_str(&Self::header("SmartHealth Assistant"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Question:".cyan().bold(),
            answer.question
        ));
        output.push_str(&format!(
            "{} {} ({})\n",
            "Catégorie:".cyan().bold(),
            info.category,
            info.shape
        ));
        output.push_str(&format!("{} {}\n", "Requête:".cyan().bold(), info.description));

        if let Some(sparql) = &info.sparql_query {
            output.push_str(&Self::section_header("SPARQL"));
            output.push_str(&Self::indent(sparql.trim(), "  ").dimmed().to_string());
            output.push('\n');
        }

        output.push_str(&Self::section_header("Réponse"));
        output.push_str(&answer.answer);
        output.push('\n');

        if !answer.data.is_empty() {
            output.push_str(&Self::section_header(&format!(
                "Résultats ({})",
                answer.data.len()
            )));
            for (i, row) in answer.data.iter().take(MAX_DISPLAYED_ROWS).enumerate() {
                output.push_str(&format!("{:>3}. {}\n", i + 1, Self::format_row(row)));
            }
            if answer.data.len() > MAX_DISPLAYED_ROWS {
                output.push_str(
                    &format!("     ... {} de plus\n", answer.data.len() - MAX_DISPLAYED_ROWS)
                        .dimmed()
                        .to_string(),
                );
            }
        }

        if let Some(suggestion) = &answer.suggestion {
            output.push_str(&format!("\n{}\n", suggestion.yellow()));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(answer: &AssistantAnswer) -> String {
        serde_json::to_string_pretty(answer).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the answer text only (concise output)
    pub fn format_answer_only(answer: &AssistantAnswer) -> String {
        let mut output = answer.answer.clone();

        if let Some(suggestion) = &answer.suggestion {
            output.push_str(&format!("\n\n{}", suggestion.yellow()));
        }

        output
    }

    /// User-facing error line; upstream detail is left to the logs
    pub fn format_error(err: &AskQuestionError) -> String {
        format!("{} {}", "Error:".red().bold(), err.user_message())
    }

    pub fn format_examples(groups: &[ExampleGroup]) -> String {
        let mut output = format!("{}\n", "Exemples de questions".cyan().bold());

        for group in groups {
            output.push_str(&format!("\n{}\n", group.category.yellow().bold()));
            for question in group.questions {
                output.push_str(&format!("  * {}\n", question));
            }
        }

        output
    }

    pub fn format_capabilities(capabilities: &Capabilities) -> String {
        let mut output = format!("{}\n", "Capacités de l'assistant".cyan().bold());

        for capability in capabilities.categories {
            output.push_str(&format!(
                "\n{} - {}\n",
                capability.name.yellow().bold(),
                capability.description
            ));
            for example in capability.examples {
                output.push_str(&format!("  * {}\n", example.dimmed()));
            }
        }

        output.push_str(&format!("\n{}\n", "Fonctionnalités:".green().bold()));
        for feature in capabilities.features {
            output.push_str(&format!("  * {}\n", feature));
        }

        output
    }

    pub fn format_status(status: &EndpointStatus) -> String {
        let mut output = format!("{} {}\n", "Endpoint:".cyan().bold(), status.location);

        if status.reachable {
            output.push_str(&format!("{} {}\n", "Status:".cyan().bold(), "connected".green()));
        } else {
            output.push_str(&format!("{} {}\n", "Status:".cyan().bold(), "unreachable".red()));
        }

        if let Some(count) = status.triple_count {
            output.push_str(&format!("{} {}\n", "Triples:".cyan().bold(), count));
        }

        if let Some(error) = &status.error {
            output.push_str(&format!("{} {}\n", "Error:".red().bold(), error));
        }

        output
    }

    /// One row as `variable=value` pairs; URIs are shortened to their local name
    fn format_row(row: &Binding) -> String {
        row.variables()
            .filter_map(|var| {
                let term = row.get(var)?;
                let shown = match term.kind.as_deref() {
                    Some("uri") => term.local_name().unwrap_or(&term.value),
                    _ => term.value.as_str(),
                };
                Some(format!("{}={}", var.dimmed(), shown))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
