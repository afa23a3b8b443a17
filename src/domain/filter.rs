use super::{Category, FaqItem};

/// Search term and category selection applied to the FAQ list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    /// Raw search term. Matched case-insensitively as a substring, without
    /// trimming.
    pub search_term: String,
    /// Restricts results to a single category when set.
    pub category: Option<Category>,
}

impl Filter {
    /// Checks whether an item passes both the category and search filters.
    #[must_use]
    pub fn matches(&self, item: &FaqItem) -> bool {
        if self.category.is_some_and(|category| item.category != category) {
            return false;
        }

        let search = self.search_term.to_lowercase();
        item.question.to_lowercase().contains(&search)
            || item.answer.text().to_lowercase().contains(&search)
    }

    /// Returns the matching items in their original order.
    #[must_use]
    pub fn apply<'a>(&self, items: &'a [FaqItem]) -> Vec<&'a FaqItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

/// Message shown when nothing matches.
#[must_use]
pub fn no_results_message(search_term: &str, category: Option<Category>) -> String {
    let category = category.map_or("All", Category::label);
    format!("No results found for \"{search_term}\" in {category} category.")
}
