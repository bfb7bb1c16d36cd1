//! Read-only view of an already-parsed JSX-like markup tree.
//!
//! The host owns parsing; it hands the engine a [`MarkupNode`] tree whose
//! attribute values are classified as literal, unresolved or spread.

pub mod dom;
mod node;

pub use dom::is_native_tag;
pub use node::{AttrValue, Attribute, Child, Descendants, Expression, MarkupNode};
pub use rowan::{TextRange, TextSize};
