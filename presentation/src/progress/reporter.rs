//! Progress reporting while a question is answered

use assistant_application::AskProgressNotifier;
use assistant_domain::QueryInfo;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a spinner while the endpoint is queried
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn complete_message(rows: Option<usize>) -> String {
        match rows {
            Some(n) => format!("{} {} ligne(s)", "v".green(), n),
            None => format!("{} échec", "x".red()),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl AskProgressNotifier for ProgressReporter {
    fn on_classified(&self, info: &QueryInfo) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(info.category.to_string());
        pb.set_message(info.description.clone());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut spinner) = self.spinner.lock() {
            *spinner = Some(pb);
        }
    }

    fn on_query_start(&self, endpoint: &str) {
        if let Ok(spinner) = self.spinner.lock()
            && let Some(pb) = spinner.as_ref()
        {
            pb.set_message(format!("interrogation de {}", endpoint));
        }
    }

    fn on_query_complete(&self, rows: Option<usize>) {
        if let Ok(mut spinner) = self.spinner.lock()
            && let Some(pb) = spinner.take()
        {
            pb.finish_and_clear();
            eprintln!("{}", Self::complete_message(rows));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl AskProgressNotifier for SimpleProgress {
    fn on_classified(&self, info: &QueryInfo) {
        eprintln!(
            "{} {} ({})",
            "->".cyan(),
            info.category.to_string().bold(),
            info.description
        );
    }

    fn on_query_start(&self, endpoint: &str) {
        eprintln!("  {} {}", "querying".dimmed(), endpoint);
    }

    fn on_query_complete(&self, rows: Option<usize>) {
        eprintln!("  {}", ProgressReporter::complete_message(rows));
    }
}
