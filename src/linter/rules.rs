use crate::config::Config;
use crate::linter::diagnostics::Diagnostic;
use crate::syntax::MarkupNode;

pub mod aria_props;
pub mod click_events_have_key_events;
pub mod heading_has_content;
pub mod img_redundant_alt;
pub mod label_has_associated_control;

/// Rules are shared across threads by [`crate::linter::lint_batch`].
pub trait Rule: Send + Sync {
    fn name(&self) -> &str;
    fn check(&self, tree: &MarkupNode, input: &str, config: &Config) -> Vec<Diagnostic>;
}

pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    pub fn get(&self, name: &str) -> Option<&dyn Rule> {
        self.rules
            .iter()
            .find(|rule| rule.name() == name)
            .map(|rule| rule.as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.name())
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
