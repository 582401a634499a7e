//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! Filter and selection state persists across lines, so the REPL behaves
//! like the dashboard: each change re-renders the visible use cases.

use crate::cli::{ShowArgs, TagsArgs};
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use catalog_browser::{CatalogBrowser, Message};
use catalog_domain::{RecordId, TagMode};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL.
pub fn run_repl(browser: &mut CatalogBrowser, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.info("Use case browser - Type 'help' for commands, 'exit' to quit"));
    println!("{}", browser.view().summary());
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline(&prompt(browser)) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(cmd) => {
                        if let Err(e) = execute_repl_command(cmd, browser, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq)]
enum ReplCommand {
    Exit,
    Help,
    List,
    Tags(Option<String>),
    Show(Option<String>),
    Apply(Message),
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    // Arguments keep their inner whitespace; only the ends are trimmed
    let rest = line
        .trim()
        .split_once(char::is_whitespace)
        .map(|(_, rest)| rest.trim().to_string())
        .unwrap_or_default();

    match parts[0] {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "list" | "ls" => Ok(ReplCommand::List),
        "tags" => Ok(ReplCommand::Tags(non_empty(rest))),
        "show" => Ok(ReplCommand::Show(non_empty(rest))),
        "tag" => {
            if rest.is_empty() {
                return Err(CliError::InvalidInput("Usage: tag <tag>".to_string()));
            }
            Ok(ReplCommand::Apply(Message::ToggleTag(rest)))
        }
        "tags-set" => {
            let tags = rest
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
            Ok(ReplCommand::Apply(Message::SetActiveTags(tags)))
        }
        "search" => Ok(ReplCommand::Apply(Message::SetSearchQuery(rest))),
        "clear" => Ok(ReplCommand::Apply(Message::ClearFilters)),
        "mode" => {
            let mode = TagMode::parse(&rest)
                .ok_or_else(|| CliError::InvalidInput("Usage: mode <any|all>".to_string()))?;
            Ok(ReplCommand::Apply(Message::SetMode(mode)))
        }
        "select" => {
            if rest.is_empty() {
                return Err(CliError::InvalidInput("Usage: select <id>".to_string()));
            }
            Ok(ReplCommand::Apply(Message::Select(RecordId::new(rest))))
        }
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            parts[0]
        ))),
    }
}

/// Execute a REPL command.
fn execute_repl_command(cmd: ReplCommand, browser: &mut CatalogBrowser, formatter: &Formatter) -> Result<()> {
    match cmd {
        ReplCommand::List => {
            println!("{}", formatter.format_view(&browser.view())?);
        }
        ReplCommand::Tags(search) => {
            commands::execute_tags(TagsArgs { search }, browser, formatter)?;
        }
        ReplCommand::Show(Some(id)) => {
            commands::execute_show(ShowArgs { id }, browser, formatter)?;
        }
        ReplCommand::Show(None) => match browser.selection() {
            Some(id) => {
                let id = id.to_string();
                commands::execute_show(ShowArgs { id }, browser, formatter)?;
            }
            None => println!("{}", formatter.warning("Nothing selected. Use 'select <id>' first.")),
        },
        ReplCommand::Apply(message) => {
            let view = browser.handle(message)?;
            println!("{}", formatter.format_view(&view)?);
        }
        ReplCommand::Exit | ReplCommand::Help => {}
    }

    Ok(())
}

fn prompt(browser: &CatalogBrowser) -> String {
    let filters = browser.filters();
    let mut parts = Vec::new();
    if !filters.active_tags().is_empty() {
        parts.push(format!("{}:{}", browser.mode(), filters.active_tags().join(",")));
    }
    if !filters.search_query().trim().is_empty() {
        parts.push(format!("\"{}\"", filters.search_query().trim()));
    }

    if parts.is_empty() {
        "usecases> ".to_string()
    } else {
        format!("usecases [{}]> ", parts.join(" "))
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  list                       - Show use cases matching the current filters");
    println!("  tags [text]                - List tags, optionally only those containing text");
    println!("  tag <tag>                  - Toggle a tag filter on or off");
    println!("  tags-set <t1>, <t2>, ...   - Replace all tag filters");
    println!("  search [text]              - Set the search text (empty clears it)");
    println!("  clear                      - Remove all tag filters and the search text");
    println!("  mode <any|all>             - Match any active tag, or require all of them");
    println!("  select <id>                - Select a use case (again to deselect)");
    println!("  show [id]                  - Show details for a use case (default: selected)");
    println!("  help, ?                    - Show this help");
    println!("  exit, quit, q              - Exit REPL");
    println!();
}
