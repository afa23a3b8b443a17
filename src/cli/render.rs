//! Drawing a [`Screen`] on the terminal.

use faq::{Answer, Body, Screen};
use serde_json::json;

use super::terminal::{Colorize, is_narrow};

/// Output formats for a rendered screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Prints the screen in the requested format.
///
/// `quiet` only applies to table output.
pub fn print(screen: &Screen, output: OutputFormat, quiet: bool) -> anyhow::Result<()> {
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&to_json(screen))?),
        OutputFormat::Table if quiet => print_quiet(screen),
        OutputFormat::Table => print!("{}", to_text(screen)),
    }
    Ok(())
}

/// One question per line, for scripting.
fn print_quiet(screen: &Screen) {
    if let Body::Items(items) = &screen.body {
        for item in items {
            println!("{}", item.question);
        }
    }
}

/// Formats the screen as human-readable text.
pub fn to_text(screen: &Screen) -> String {
    let mut out = String::new();
    let narrow = is_narrow();

    out.push_str(&format!("{}\n", "Frequently Asked Questions".heading()));

    if screen.search_term.is_empty() {
        out.push_str(&format!("Search: {}\n", "Your Question..".dim()));
    } else {
        out.push_str(&format!("Search: \"{}\"\n", screen.search_term));
    }

    let buttons: Vec<String> = screen
        .categories
        .iter()
        .map(|button| {
            let label = button.category.label();
            if button.selected {
                label.selected()
            } else {
                label.to_string()
            }
        })
        .collect();
    if narrow {
        out.push_str("Categories:\n");
        for button in &buttons {
            out.push_str(&format!("  {button}\n"));
        }
    } else {
        out.push_str(&format!("Categories: {}\n", buttons.join("  ")));
    }
    out.push_str(&format!("{}\n", "──────────────────────────".dim()));

    match &screen.body {
        Body::Loading => out.push_str(&format!("{}\n", "Loading...".dim())),
        Body::Error(message) => out.push_str(&format!("{}\n", format!("Error: {message}").error())),
        Body::Empty(message) => out.push_str(&format!("{}\n", message.dim())),
        Body::Items(items) => {
            for (position, item) in items.iter().enumerate() {
                let marker = if item.expanded { "▲" } else { "▼" };
                out.push_str(&format!(
                    "{}. {} {}\n",
                    position + 1,
                    item.question,
                    marker.dim()
                ));
                if item.expanded {
                    let indent = if narrow { "  " } else { "     " };
                    for line in answer_lines(&item.answer) {
                        out.push_str(&format!("{indent}{line}\n"));
                    }
                }
            }
        }
    }

    out
}

fn answer_lines(answer: &Answer) -> Vec<&str> {
    match answer {
        Answer::Text(text) => vec![text.as_str()],
        Answer::Lines(lines) => lines.iter().map(String::as_str).collect(),
    }
}

/// Formats the screen as a JSON document.
pub fn to_json(screen: &Screen) -> serde_json::Value {
    let selected = screen
        .categories
        .iter()
        .find(|button| button.selected)
        .map(|button| button.category);

    let (status, detail) = match &screen.body {
        Body::Loading => ("loading", json!(null)),
        Body::Error(message) => ("error", json!(message)),
        Body::Empty(message) => ("empty", json!(message)),
        Body::Items(_) => ("ok", json!(null)),
    };
    let items = match &screen.body {
        Body::Items(items) => json!(items),
        _ => json!([]),
    };

    json!({
        "search_term": screen.search_term,
        "category": selected,
        "status": status,
        "message": detail,
        "items": items,
    })
}

#[cfg(test)]
mod tests {
    use faq::{Category, QueryState, ReleaseNotes, UiState, view::render};

    use super::*;

    fn loaded() -> QueryState<ReleaseNotes> {
        QueryState::Loaded(ReleaseNotes {
            note: String::new(),
            code: String::new(),
            hardware_requirements: "Line1\r\nLine2".to_string(),
        })
    }

    #[test]
    fn json_lists_filtered_items_with_expansion() {
        let mut ui = UiState::default();
        ui.select_category(Category::Hardware);
        ui.toggle_item(0);

        let value = to_json(&render(&loaded(), &ui));

        assert_eq!(value["status"], "ok");
        assert_eq!(value["category"], "Hardware");
        assert_eq!(value["items"].as_array().unwrap().len(), 1);
        assert_eq!(value["items"][0]["expanded"], true);
        assert_eq!(value["items"][0]["answer"], json!(["Line1", "Line2"]));
    }

    #[test]
    fn json_reports_empty_results() {
        let mut ui = UiState::default();
        ui.set_search_term("zoom");

        let value = to_json(&render(&loaded(), &ui));

        assert_eq!(value["status"], "empty");
        assert_eq!(
            value["message"],
            "No results found for \"zoom\" in All category."
        );
        assert_eq!(value["category"], json!(null));
    }

    #[test]
    fn text_shows_each_hardware_line_when_expanded() {
        let mut ui = UiState::default();
        ui.toggle_item(0);

        let text = to_text(&render(&loaded(), &ui));

        let line1 = text.find("Line1").unwrap();
        let line2 = text.find("Line2").unwrap();
        assert!(line1 < line2);
        assert!(text.contains("What is Casablanca.ai?"));
    }

    #[test]
    fn text_hides_collapsed_answers() {
        let text = to_text(&render(&loaded(), &UiState::default()));
        assert!(!text.contains("Line1"));
    }

    #[test]
    fn text_shows_error_message() {
        let failed = QueryState::Failed(faq::FetchError::NotOk { status: 500 });
        let text = to_text(&render(&failed, &UiState::default()));
        assert!(text.contains("Network response was not ok"));
        assert!(!text.contains("What is Casablanca.ai?"));
    }
}
