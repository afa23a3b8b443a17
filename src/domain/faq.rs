use serde::Serialize;

use super::{Category, ReleaseNotes, format_lines};

/// Answer shown while the hardware requirements have not arrived.
///
/// This is also what remains on screen when the fetch fails, since nothing
/// retries it.
pub const LOADING_HARDWARE_REQUIREMENTS: &str = "Loading hardware requirements...";

/// The body of an FAQ answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    /// A single paragraph of plain text.
    Text(String),
    /// Formatted text, rendered one fragment per line.
    Lines(Vec<String>),
}

impl Answer {
    /// Returns the answer as plain text, for searching.
    ///
    /// Line fragments are joined with `\n`.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Lines(lines) => lines.join("\n"),
        }
    }
}

/// One question/answer/category triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqItem {
    /// The question, shown as the item header.
    pub question: String,
    /// The answer, shown when the item is expanded.
    pub answer: Answer,
    /// The category used by the category filter.
    pub category: Category,
}

impl FaqItem {
    fn new(question: &str, answer: Answer, category: Category) -> Self {
        Self {
            question: question.to_string(),
            answer,
            category,
        }
    }
}

/// Builds the fixed FAQ catalogue, in declaration order.
///
/// The first entry's answer is taken from the release notes when they are
/// available, and is [`LOADING_HARDWARE_REQUIREMENTS`] otherwise.
#[must_use]
pub fn faq_items(notes: Option<&ReleaseNotes>) -> Vec<FaqItem> {
    let hardware = notes.map_or_else(
        || Answer::Text(LOADING_HARDWARE_REQUIREMENTS.to_string()),
        |notes| Answer::Lines(format_lines(&notes.hardware_requirements)),
    );

    vec![
        FaqItem::new(
            "What system requirements must be met?",
            hardware,
            Category::Hardware,
        ),
        FaqItem::new(
            "What is Casablanca.ai?",
            Answer::Text(
                "Casablanca.ai is an AI-powered video software designed to enhance video quality \
                 and communication during Microsoft Teams meetings."
                    .to_string(),
            ),
            Category::Software,
        ),
        FaqItem::new(
            "How does Casablanca.ai improve video calls in MS Teams?",
            Answer::Text(
                "Casablanca.ai improves video calls by using AI to enhance image quality, reduce \
                 noise, and optimize performance, ensuring smoother video communication."
                    .to_string(),
            ),
            Category::Features,
        ),
        FaqItem::new(
            "Can Casablanca.ai integrate with other video conferencing tools?",
            Answer::Text(
                "Currently, Casablanca.ai is optimized for Microsoft Teams, but integrations with \
                 other video conferencing tools are planned for future releases."
                    .to_string(),
            ),
            Category::Integration,
        ),
    ]
}
