use rowan::{TextRange, TextSize};

use crate::config::Config;
use crate::linter::diagnostics::{Diagnostic, Edit, Fix, Location};
use crate::linter::rules::Rule;
use crate::suggest::{ARIA_PROPERTIES, suggest};
use crate::syntax::{Attribute, MarkupNode};

pub struct AriaPropsRule;

impl Rule for AriaPropsRule {
    fn name(&self) -> &str {
        "aria-props"
    }

    fn check(&self, tree: &MarkupNode, input: &str, config: &Config) -> Vec<Diagnostic> {
        let options = &config.rules.aria_props;
        let mut diagnostics = Vec::new();

        for node in tree.descendants() {
            for attribute in node.attributes() {
                if attribute.is_spread() || !is_invalid_aria(&attribute.name) {
                    continue;
                }

                let suggestions = suggest(
                    &attribute.name,
                    &ARIA_PROPERTIES,
                    options.max_suggestions,
                    options.max_distance,
                );
                let location = match attribute.range {
                    Some(range) => Location::from_range(range, input),
                    None => Location::from_node(node, input),
                };

                let mut diagnostic =
                    Diagnostic::error(location, self.name(), message(&attribute.name, &suggestions));
                if let Some(fix) = create_fix(attribute, &suggestions) {
                    diagnostic = diagnostic.with_fix(fix);
                }
                diagnostics.push(diagnostic);
            }
        }

        diagnostics
    }
}

fn is_invalid_aria(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower.starts_with("aria-") && !ARIA_PROPERTIES.contains(&lower)
}

fn message(name: &str, suggestions: &[&str]) -> String {
    let mut message = format!("{name}: This attribute is an invalid ARIA attribute.");
    if !suggestions.is_empty() {
        message.push_str(&format!(" Did you mean to use {}?", suggestions.join(" or ")));
    }
    message
}

/// Rename the attribute to the closest suggestion. The attribute range starts
/// at its name.
fn create_fix(attribute: &Attribute, suggestions: &[&str]) -> Option<Fix> {
    let range = attribute.range?;
    let best = suggestions.first()?;
    let name_range = TextRange::at(range.start(), TextSize::of(attribute.name.as_str()));

    Some(Fix {
        message: format!("Replace '{}' with '{}'", attribute.name, best),
        edits: vec![Edit {
            range: name_range,
            replacement: best.to_string(),
        }],
    })
}
