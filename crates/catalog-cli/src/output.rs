//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use catalog_browser::FilteredView;
use catalog_domain::Record;
use colored::*;
use serde_json::{json, Value};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

const DESCRIPTION_WIDTH: usize = 60;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the visible records of a view.
    pub fn format_view(&self, view: &FilteredView) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_view_json(view),
            OutputFormat::Table => Ok(self.format_view_table(view)),
            OutputFormat::Quiet => Ok(self.format_view_quiet(view)),
        }
    }

    /// Format a tag list, marking active tags.
    pub fn format_tags(&self, tags: &[&str], active: &[String]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let entries: Vec<Value> = tags
                    .iter()
                    .map(|tag| json!({ "tag": tag, "active": active.iter().any(|a| a == tag) }))
                    .collect();
                Ok(serde_json::to_string_pretty(&entries)?)
            }
            OutputFormat::Table => {
                if tags.is_empty() {
                    return Ok(self.colorize("No tags found.", "yellow"));
                }
                let lines: Vec<String> = tags
                    .iter()
                    .map(|tag| {
                        if active.iter().any(|a| a == tag) {
                            self.colorize(&format!("[x] {}", tag), "cyan")
                        } else {
                            format!("[ ] {}", tag)
                        }
                    })
                    .collect();
                Ok(lines.join("\n"))
            }
            OutputFormat::Quiet => Ok(tags.join("\n")),
        }
    }

    /// Format a single record in detail.
    pub fn format_record(&self, record: &Record, selected: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let mut value = record_json(record);
                value["selected"] = json!(selected);
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(record.id.to_string()),
            OutputFormat::Table => {
                let title = if selected {
                    self.colorize(&format!("* {}", record.name), "green")
                } else {
                    record.name.clone()
                };
                let mut lines = vec![
                    title,
                    format!("  ID:          {}", record.id),
                    format!("  Description: {}", record.description),
                    format!("  Tags:        {}", record.tags.join(", ")),
                ];
                if let Some(url) = &record.image_url {
                    lines.push(format!("  Image:       {}", url));
                }
                if let Some(url) = &record.demo_link {
                    lines.push(format!("  Demo:        {}", url));
                }
                Ok(lines.join("\n"))
            }
        }
    }

    fn format_view_json(&self, view: &FilteredView) -> Result<String> {
        let records: Vec<Value> = view.records.iter().map(record_json).collect();
        let value = json!({
            "results": view.results(),
            "total": view.total,
            "mode": view.mode.as_str(),
            "active_tags": view.active_tags,
            "search_query": view.search_query,
            "selected": view.selected.as_ref().map(|id| id.to_string()),
            "records": records,
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_view_table(&self, view: &FilteredView) -> String {
        if view.records.is_empty() {
            let message = self.colorize("No use cases match the current filters.", "yellow");
            return format!("{}\n{}", message, view.summary());
        }

        let mut builder = Builder::default();
        builder.push_record(["", "ID", "Name", "Tags", "Description"]);

        for record in &view.records {
            let marker = if view.is_selected(&record.id) { "*" } else { "" };
            builder.push_record([
                marker.to_string(),
                record.id.to_string(),
                record.name.clone(),
                record.tags.join(", "),
                truncate(&record.description, DESCRIPTION_WIDTH),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", table, self.colorize(&view.summary(), "blue"))
    }

    fn format_view_quiet(&self, view: &FilteredView) -> String {
        let ids: Vec<String> = view.records.iter().map(|r| r.id.to_string()).collect();
        ids.join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn record_json(record: &Record) -> Value {
    json!({
        "id": record.id.to_string(),
        "name": record.name,
        "description": record.description,
        "tags": record.tags,
        "image_url": record.image_url,
        "demo_link": record.demo_link,
    })
}

/// Shorten `text` to at most `max` characters, ending with an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_domain::{RecordId, TagMode};

    fn create_test_record() -> Record {
        Record::new(
            RecordId::new("course"),
            "Course Website",
            "Teach a course with a site",
            vec!["Education".to_string(), "Course".to_string()],
        )
        .with_demo_link("https://example.com/demo")
    }

    fn create_test_view(selected: bool) -> FilteredView {
        FilteredView {
            records: vec![create_test_record()],
            total: 4,
            available_tags: vec!["Education".to_string(), "Course".to_string()],
            active_tags: vec!["Education".to_string()],
            search_query: String::new(),
            mode: TagMode::Any,
            selected: selected.then(|| RecordId::new("course")),
        }
    }

    #[test]
    fn test_json_view() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_view(&create_test_view(true)).unwrap();

        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["results"], 1);
        assert_eq!(value["total"], 4);
        assert_eq!(value["mode"], "any");
        assert_eq!(value["selected"], "course");
        assert_eq!(value["records"][0]["name"], "Course Website");
    }

    #[test]
    fn test_quiet_view() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_view(&create_test_view(false)).unwrap();
        assert_eq!(output, "course");
    }

    #[test]
    fn test_table_view() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_view(&create_test_view(true)).unwrap();
        assert!(output.contains("Course Website"));
        assert!(output.contains("Description"));
        assert!(output.contains("*"));
        assert!(output.ends_with("1 of 4 use cases"));
    }

    #[test]
    fn test_empty_view() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let mut view = create_test_view(false);
        view.records.clear();
        let output = formatter.format_view(&view).unwrap();
        assert!(output.contains("No use cases match"));
        assert!(output.contains("0 of 4 use cases"));
    }

    #[test]
    fn test_tags_table_marks_active() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_tags(&["Education", "Course"], &["Education".to_string()])
            .unwrap();
        assert_eq!(output, "[x] Education\n[ ] Course");
    }

    #[test]
    fn test_tags_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_tags(&["Blog"], &[]).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["tag"], "Blog");
        assert_eq!(value[0]["active"], false);
    }

    #[test]
    fn test_record_detail() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_record(&create_test_record(), true).unwrap();
        assert!(output.starts_with("* Course Website"));
        assert!(output.contains("Demo:        https://example.com/demo"));
        assert!(!output.contains("Image:"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.error("bad"), "✗ bad");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }
}
