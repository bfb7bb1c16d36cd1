use crate::config::Config;
use crate::linter::diagnostics::Diagnostic;
use crate::linter::rules::RuleRegistry;
use crate::syntax::MarkupNode;

pub struct LintRunner {
    registry: RuleRegistry,
}

impl LintRunner {
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    pub fn run(&self, tree: &MarkupNode, input: &str, config: &Config) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for rule in self.registry.rules() {
            if !config.is_enabled(rule.name()) {
                log::debug!("Skipping disabled lint rule: {}", rule.name());
                continue;
            }
            log::debug!("Running lint rule: {}", rule.name());
            let rule_diagnostics = rule.check(tree, input, config);
            log::debug!(
                "Rule {} found {} diagnostic(s)",
                rule.name(),
                rule_diagnostics.len()
            );
            diagnostics.extend(rule_diagnostics);
        }

        // stable, so diagnostics at one position keep rule order
        diagnostics.sort_by_key(|d| (d.location.line, d.location.column));
        diagnostics
    }
}
