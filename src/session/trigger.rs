use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchMode {
    /// The whole message must equal a keyword.
    #[default]
    Exact,
    /// A keyword may appear anywhere in the message.
    Contains,
}

/// Keywords that start a bot from its start node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trigger {
    pub keywords: Vec<String>,
    #[serde(default)]
    pub match_mode: MatchMode,
}

impl Trigger {
    pub fn exact<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            match_mode: MatchMode::Exact,
        }
    }

    pub fn contains<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            match_mode: MatchMode::Contains,
            ..Self::exact(keywords)
        }
    }

    /// Case-insensitive, ignoring surrounding whitespace. Blank keywords never match.
    pub fn matches(&self, text: &str) -> bool {
        let text = text.trim().to_lowercase();
        self.keywords
            .iter()
            .map(|keyword| keyword.trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty())
            .any(|keyword| match self.match_mode {
                MatchMode::Exact => text == keyword,
                MatchMode::Contains => text.contains(&keyword),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_and_contains() {
        let exact = Trigger::exact(["Hi", " menu "]);
        assert!(exact.matches("hi"));
        assert!(exact.matches("  MENU"));
        assert!(!exact.matches("hi there"));

        let contains = Trigger::contains(["price"]);
        assert!(contains.matches("What is the PRICE?"));
        assert!(!contains.matches("hello"));
    }

    #[test]
    fn blank_keywords_are_ignored() {
        let trigger = Trigger::contains(["", "   "]);
        assert!(!trigger.matches("anything"));
    }
}
