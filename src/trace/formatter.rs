use crate::intent::MessageIntent;
use crate::node::ChatbotNode;
use itertools::Itertools;

/// Formats walks and intents into human-readable strings.
pub struct WalkFormatter;

impl WalkFormatter {
    /// Renders a walk as `start -> menu [awaiting response]`.
    pub fn format_walk(walked: &[&ChatbotNode]) -> String {
        if walked.is_empty() {
            return "(empty walk)".to_string();
        }
        let path = walked.iter().map(|node| node.node_id.as_str()).join(" -> ");
        match walked.last() {
            Some(last) if last.need_response() => format!("{} [awaiting response]", path),
            _ => format!("{} [end]", path),
        }
    }

    /// One line per intent: node id, chosen directive and a short preview of the text.
    pub fn format_intents(intents: &[MessageIntent]) -> String {
        intents
            .iter()
            .enumerate()
            .map(|(index, intent)| {
                format!(
                    "{}. {} ({}) {}",
                    index + 1,
                    intent.node_id,
                    intent.directive().name(),
                    Self::preview(&intent.message)
                )
            })
            .join("\n")
    }

    fn preview(message: &str) -> String {
        const LIMIT: usize = 40;
        let flat = message.split_whitespace().join(" ");
        if flat.chars().count() > LIMIT {
            format!("\"{}...\"", flat.chars().take(LIMIT).collect::<String>())
        } else {
            format!("\"{}\"", flat)
        }
    }
}
