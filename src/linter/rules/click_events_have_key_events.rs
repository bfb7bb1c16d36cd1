use crate::alias::{AliasConfig, AliasLayer};
use crate::config::Config;
use crate::content::is_hidden_from_screen_reader;
use crate::linter::diagnostics::{Diagnostic, Location};
use crate::linter::rules::Rule;
use crate::syntax::dom::{INTERACTIVE_TAGS, LINK_TAGS, is_native_tag};
use crate::syntax::{AttrValue, Expression, MarkupNode};

const MESSAGE: &str =
    "Visible, non-interactive elements with click handlers must have at least one keyboard listener.";

const KEY_HANDLERS: &[&str] = &["onKeyDown", "onKeyUp", "onKeyPress"];

pub struct ClickEventsHaveKeyEventsRule;

impl Rule for ClickEventsHaveKeyEventsRule {
    fn name(&self) -> &str {
        "click-events-have-key-events"
    }

    fn check(&self, tree: &MarkupNode, input: &str, config: &Config) -> Vec<Diagnostic> {
        let options = AliasLayer::new();
        let aliases = AliasConfig::new(&options, &config.settings);

        let mut diagnostics = Vec::new();
        for node in tree.descendants() {
            if !node.is_element() || node.attribute("onClick").is_none() {
                continue;
            }
            // unknown components may render anything
            let Some(tag) = aliases.resolve_tag(node.name()).filter(|tag| is_native_tag(tag))
            else {
                continue;
            };
            if is_hidden_from_screen_reader(node, &aliases)
                || is_presentation(node)
                || is_interactive(tag, node)
                || has_key_handler(node)
            {
                continue;
            }

            log::trace!("'{}' has onClick without a keyboard listener", node.name());
            diagnostics.push(Diagnostic::error(
                Location::from_node(node, input),
                self.name(),
                MESSAGE,
            ));
        }

        diagnostics
    }
}

fn is_presentation(node: &MarkupNode) -> bool {
    node.attribute("role")
        .and_then(AttrValue::as_str)
        .is_some_and(|role| matches!(role.to_ascii_lowercase().as_str(), "presentation" | "none"))
}

fn is_interactive(tag: &str, node: &MarkupNode) -> bool {
    INTERACTIVE_TAGS.contains(&tag) || (LINK_TAGS.contains(&tag) && node.attribute("href").is_some())
}

fn has_key_handler(node: &MarkupNode) -> bool {
    KEY_HANDLERS.iter().any(|name| {
        node.attribute(name)
            .is_some_and(|value| *value != AttrValue::Expression(Expression::Undefined))
    })
}
