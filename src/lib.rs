//! Accessibility checks for JSX-like component trees.
//!
//! The host parses source into a [`MarkupNode`] tree and hands it over
//! together with a [`Config`]. The engine resolves custom components to native
//! tags, searches for content a screen reader would announce, matches labels
//! to their controls and suggests corrections for misspelled `aria-*`
//! attributes.
//!
//! ```no_run
//! use a11ylint::{Config, MarkupNode, linter::lint};
//!
//! let tree = MarkupNode::element("label").text("Name");
//! let diagnostics = lint(&tree, "", &Config::default());
//! ```

pub mod alias;
pub mod config;
pub mod content;
pub mod glob;
pub mod label;
pub mod linter;
pub mod suggest;
pub mod syntax;

pub use alias::{AliasConfig, AliasLayer, AttributeRole, resolve_tag};
pub use config::{Config, ConfigBuilder, parse_config_str};
pub use content::{Content, has_accessible_content};
pub use glob::matches;
pub use label::{AssociationPolicy, LabelFailure, LabelOutcome};
pub use suggest::{Vocabulary, suggest};
pub use syntax::{AttrValue, Expression, MarkupNode};

#[cfg(test)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
