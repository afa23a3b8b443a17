use clap::Parser;
use dialoguer::{Input, Select};
use faq::{Body, Category, Config, Screen};
use tracing::{debug, instrument};

use super::render;

#[derive(Debug, Parser)]
#[command(about = "Browse the FAQ interactively")]
pub struct Browse {
    /// Initial search term
    #[arg(short, long, default_value = "")]
    search: String,
}

/// Something the user can do from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Search,
    Category(Category),
    Toggle(usize),
    Refresh,
    Quit,
}

impl Browse {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let mut view = super::mount(config)?;
        view.ui_mut().set_search_term(self.search);

        loop {
            let screen = view.screen();
            println!();
            print!("{}", render::to_text(&screen));

            let (actions, labels) = menu(&screen);
            let choice = Select::new()
                .with_prompt("What next?")
                .items(labels.as_slice())
                .default(0)
                .interact()?;

            let action = actions[choice];
            debug!(?action, "browse action");
            let ui = view.ui_mut();
            match action {
                Action::Search => {
                    let term: String = Input::new()
                        .with_prompt("Your Question..")
                        .with_initial_text(ui.search_term.clone())
                        .allow_empty(true)
                        .interact_text()?;
                    ui.set_search_term(term);
                }
                Action::Category(category) => ui.select_category(category),
                Action::Toggle(index) => ui.toggle_item(index),
                Action::Refresh => {}
                Action::Quit => return Ok(()),
            }
        }
    }
}

/// Builds the menu for the current screen.
///
/// Items can only be toggled while they are displayed. Refresh is offered
/// while the release notes are still loading.
fn menu(screen: &Screen) -> (Vec<Action>, Vec<String>) {
    let mut entries = vec![(Action::Search, "Search".to_string())];

    for button in &screen.categories {
        let label = if button.selected {
            format!("Category: {} (clear)", button.category)
        } else {
            format!("Category: {}", button.category)
        };
        entries.push((Action::Category(button.category), label));
    }

    match &screen.body {
        Body::Items(items) => {
            for (index, item) in items.iter().enumerate() {
                let verb = if item.expanded { "Collapse" } else { "Expand" };
                entries.push((Action::Toggle(index), format!("{verb}: {}", item.question)));
            }
        }
        Body::Loading => entries.push((Action::Refresh, "Refresh".to_string())),
        Body::Error(_) | Body::Empty(_) => {}
    }

    entries.push((Action::Quit, "Quit".to_string()));
    entries.into_iter().unzip()
}

#[cfg(test)]
mod tests {
    use faq::{QueryState, ReleaseNotes, UiState, view::render};

    use super::*;

    fn loaded() -> QueryState<ReleaseNotes> {
        QueryState::Loaded(ReleaseNotes {
            note: String::new(),
            code: String::new(),
            hardware_requirements: "8 GB RAM".to_string(),
        })
    }

    #[test]
    fn menu_offers_every_displayed_item() {
        let (actions, labels) = menu(&render(&loaded(), &UiState::default()));

        assert_eq!(actions.len(), labels.len());
        assert_eq!(actions.first(), Some(&Action::Search));
        assert_eq!(actions.last(), Some(&Action::Quit));
        let toggles = actions
            .iter()
            .filter(|action| matches!(action, Action::Toggle(_)))
            .count();
        assert_eq!(toggles, 4);
    }

    #[test]
    fn menu_marks_selected_category_and_expanded_item() {
        let mut ui = UiState::default();
        ui.select_category(Category::Software);
        ui.toggle_item(0);

        let (_, labels) = menu(&render(&loaded(), &ui));

        assert!(labels.contains(&"Category: Software (clear)".to_string()));
        assert!(labels.contains(&"Collapse: What is Casablanca.ai?".to_string()));
    }

    #[test]
    fn menu_offers_refresh_while_loading() {
        let (actions, _) = menu(&render(&QueryState::Loading, &UiState::default()));

        assert!(actions.contains(&Action::Refresh));
        assert!(!actions.iter().any(|action| matches!(action, Action::Toggle(_))));
    }
}
