use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A label used to partition FAQ entries for filtering.
///
/// The set is closed: every FAQ entry belongs to exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// System and hardware requirements.
    Hardware,
    /// What the software is.
    Software,
    /// What the software does.
    Features,
    /// Interoperability with other tools.
    Integration,
}

impl Category {
    /// All categories, in the order the category buttons are shown.
    pub const ALL: [Self; 4] = [
        Self::Hardware,
        Self::Software,
        Self::Features,
        Self::Integration,
    ];

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hardware => "Hardware",
            Self::Software => "Software",
            Self::Features => "Features",
            Self::Integration => "Integration",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string does not name one of the fixed categories.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}' (expected one of: Hardware, Software, Features, Integration)")]
pub struct UnknownCategory(String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("Hardware", Category::Hardware; "exact label")]
    #[test_case("software", Category::Software; "lowercase")]
    #[test_case("FEATURES", Category::Features; "uppercase")]
    #[test_case("InTeGrAtIoN", Category::Integration; "mixed case")]
    fn parses_labels_case_insensitively(input: &str, expected: Category) {
        assert_eq!(input.parse::<Category>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_labels() {
        let error = "Billing".parse::<Category>().unwrap_err();
        assert!(error.to_string().starts_with("unknown category 'Billing'"));
    }

    #[test]
    fn rejects_padded_labels() {
        assert!(" Hardware".parse::<Category>().is_err());
    }

    #[test]
    fn buttons_are_listed_in_fixed_order() {
        let labels: Vec<String> = Category::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["Hardware", "Software", "Features", "Integration"]);
    }
}
