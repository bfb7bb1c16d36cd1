use crate::alias::AliasConfig;
use crate::config::Config;
use crate::content::{has_accessible_content, is_hidden_from_screen_reader};
use crate::linter::diagnostics::{Diagnostic, Location};
use crate::linter::rules::Rule;
use crate::syntax::MarkupNode;
use crate::syntax::dom::HEADING_TAGS;

const MESSAGE: &str =
    "Headings must have content and the content must be accessible by a screen reader.";

pub struct HeadingHasContentRule;

impl Rule for HeadingHasContentRule {
    fn name(&self) -> &str {
        "heading-has-content"
    }

    fn check(&self, tree: &MarkupNode, input: &str, config: &Config) -> Vec<Diagnostic> {
        let rule_options = &config.rules.heading_has_content;
        let options = rule_options.alias_layer();
        let aliases = AliasConfig::new(&options, &config.settings);
        let depth = rule_options.depth();

        tree.descendants()
            .filter(|node| is_heading(node, &aliases))
            .filter(|node| !is_hidden_from_screen_reader(node, &aliases))
            .filter(|node| !has_accessible_content(node, &aliases, depth))
            .map(|node| Diagnostic::error(Location::from_node(node, input), self.name(), MESSAGE))
            .collect()
    }
}

fn is_heading(node: &MarkupNode, aliases: &AliasConfig) -> bool {
    node.is_element()
        && aliases
            .resolve_tag(node.name())
            .is_some_and(|tag| HEADING_TAGS.contains(&tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::MarkupNode as N;

    fn count(tree: &N) -> usize {
        HeadingHasContentRule.check(tree, "", &Config::default()).len()
    }

    #[test]
    fn test_every_level_is_checked() {
        let tree = HEADING_TAGS
            .iter()
            .fold(N::element("main"), |tree, tag| tree.child(N::element(*tag)));
        assert_eq!(count(&tree), 6);
    }

    #[test]
    fn test_hidden_heading_is_skipped() {
        let tree = N::element("h1").flag("aria-hidden");
        assert_eq!(count(&tree), 0);
    }

    #[test]
    fn test_heading_with_content() {
        assert_eq!(count(&N::element("h2").text("Foo")), 0);
        assert_eq!(count(&N::element("h2").child(N::element("Bar"))), 0);
    }
}
