//! Console output formatter for bot answers

use colored::Colorize;
use portal_bot_application::DispatchQueryOutput;
use portal_bot_domain::{Intent, ResponseEntry, ResponseValue};

/// Formats dispatched answers for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format an answer as titled blocks, one per entry
    pub fn format(output: &DispatchQueryOutput) -> String {
        let mut text = String::new();

        text.push_str(&format!(
            "{} {}\n",
            "Topic:".cyan().bold(),
            output.intent
        ));

        if output.intent.is_unknown() {
            text.push_str(&format!(
                "{}\n",
                "Sorry, I can only answer about assignments, grades, schedules, assistants and information."
                    .dimmed()
            ));
            return text;
        }

        if output.entries.is_empty() {
            text.push_str(&format!("{}\n", "Nothing found.".dimmed()));
            return text;
        }

        for entry in &output.entries {
            text.push('\n');
            text.push_str(&Self::format_entry(output.intent, entry));
        }

        text
    }

    /// Format as JSON
    pub fn format_json(output: &DispatchQueryOutput) -> String {
        serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format one past exchange: the question, then the answer
    pub fn format_exchange(timestamp: &str, question: &str, output: &DispatchQueryOutput) -> String {
        format!(
            "{} {}\n{}",
            format!("[{}]", timestamp).dimmed(),
            question.bold(),
            Self::indent(&Self::format(output), "  ")
        )
    }

    fn format_entry(intent: Intent, entry: &ResponseEntry) -> String {
        let title_key = Self::title_key(intent);
        let title = entry.text(title_key).unwrap_or("-");
        let mut text = format!("{}\n", format!("── {} ──", title).yellow().bold());

        let width = entry
            .fields()
            .map(|(key, _)| key.len())
            .max()
            .unwrap_or(0);
        for (key, value) in entry.fields().filter(|(key, _)| *key != title_key) {
            text.push_str(&format!(
                "  {:width$}  {}\n",
                key.dimmed(),
                Self::render_value(value),
                width = width
            ));
        }
        text
    }

    /// The field shown as an entry's heading
    fn title_key(intent: Intent) -> &'static str {
        match intent {
            Intent::Information => "title",
            Intent::Schedule => "course_name",
            Intent::Assistant | Intent::Assignment | Intent::Grade | Intent::Unknown => "name",
        }
    }

    fn render_value(value: &ResponseValue) -> String {
        match value {
            ResponseValue::Integer(n) => n.to_string(),
            ResponseValue::Text(s) if s.is_empty() => "-".to_string(),
            ResponseValue::Text(s) => s.clone(),
            ResponseValue::List(items) => items.join(", "),
        }
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
