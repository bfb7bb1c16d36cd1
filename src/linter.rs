pub mod diagnostics;
pub mod rules;
pub mod runner;

pub use diagnostics::{Diagnostic, Edit, Fix, Location, Severity};
pub use rules::{Rule, RuleRegistry};
pub use runner::LintRunner;

use crate::config::Config;
use crate::syntax::MarkupNode;

/// Lint one tree and return its diagnostics. `input` is the source text the
/// node ranges refer to.
pub fn lint(tree: &MarkupNode, input: &str, config: &Config) -> Vec<Diagnostic> {
    let runner = LintRunner::new(default_registry());
    runner.run(tree, input, config)
}

/// Lint many `(tree, source)` pairs in parallel. Results keep input order.
#[cfg(not(target_arch = "wasm32"))]
pub fn lint_batch(documents: &[(MarkupNode, String)], config: &Config) -> Vec<Vec<Diagnostic>> {
    use rayon::prelude::*;

    let runner = LintRunner::new(default_registry());
    log::debug!("Linting {} document(s)", documents.len());
    documents
        .par_iter()
        .map(|(tree, input)| runner.run(tree, input, config))
        .collect()
}

/// Create the default rule registry with all built-in rules.
pub fn default_registry() -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    registry.register(Box::new(
        rules::label_has_associated_control::LabelHasAssociatedControlRule,
    ));
    registry.register(Box::new(rules::heading_has_content::HeadingHasContentRule));
    registry.register(Box::new(rules::aria_props::AriaPropsRule));
    registry.register(Box::new(rules::img_redundant_alt::ImgRedundantAltRule));
    registry.register(Box::new(
        rules::click_events_have_key_events::ClickEventsHaveKeyEventsRule,
    ));
    registry
}
