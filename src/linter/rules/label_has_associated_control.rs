use crate::alias::AliasConfig;
use crate::config::Config;
use crate::label::{LabelOutcome, evaluate};
use crate::linter::diagnostics::{Diagnostic, Location};
use crate::linter::rules::Rule;
use crate::syntax::MarkupNode;

pub struct LabelHasAssociatedControlRule;

impl Rule for LabelHasAssociatedControlRule {
    fn name(&self) -> &str {
        "label-has-associated-control"
    }

    fn check(&self, tree: &MarkupNode, input: &str, config: &Config) -> Vec<Diagnostic> {
        let rule_options = &config.rules.label_has_associated_control;
        let options = rule_options.alias_layer(&config.settings);
        let aliases = AliasConfig::new(&options, &config.settings);
        let depth = rule_options.depth();

        let mut diagnostics = Vec::new();
        for node in tree.descendants() {
            if !node.is_element() || aliases.resolve_tag(node.name()) != Some("label") {
                continue;
            }

            match evaluate(node, &aliases, rule_options.assert, depth) {
                LabelOutcome::Pass => {}
                LabelOutcome::Indeterminate => {
                    log::debug!("Label '{}' could not be fully evaluated", node.name());
                }
                LabelOutcome::Fail(failure) => {
                    diagnostics.push(Diagnostic::error(
                        Location::from_node(node, input),
                        self.name(),
                        failure.message(),
                    ));
                }
            }
        }

        diagnostics
    }
}
