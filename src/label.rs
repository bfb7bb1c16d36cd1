//! Label/control association.
//!
//! A label passes when it has accessible text and satisfies its
//! [`AssociationPolicy`]: a pointer association (a `for`-style attribute or a
//! direct `aria-label`/`aria-labelledby`), a nested control, either, or both.

use std::fmt;

use serde::Deserialize;

use crate::alias::{AliasConfig, AttributeRole};
use crate::content::{Content, has_direct_label, is_hidden_input, scan_accessible_content};
use crate::syntax::{AttrValue, MarkupNode};

/// Native tags that count as a labelled form control.
pub const CONTROL_TAGS: &[&str] = &[
    "button", "input", "meter", "output", "progress", "select", "textarea",
];

/// Which relationship between a label and its control is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum AssociationPolicy {
    #[serde(rename = "htmlFor", alias = "html-for")]
    HtmlFor,
    #[serde(rename = "nesting")]
    Nesting,
    #[default]
    #[serde(rename = "either")]
    Either,
    #[serde(rename = "both")]
    Both,
}

impl AssociationPolicy {
    pub fn is_satisfied(self, pointer: bool, nested: bool) -> bool {
        match self {
            AssociationPolicy::HtmlFor => pointer,
            AssociationPolicy::Nesting => nested,
            AssociationPolicy::Either => pointer || nested,
            AssociationPolicy::Both => pointer && nested,
        }
    }

    fn failure(self) -> LabelFailure {
        match self {
            AssociationPolicy::HtmlFor => LabelFailure::HtmlFor,
            AssociationPolicy::Nesting => LabelFailure::Nesting,
            AssociationPolicy::Either => LabelFailure::Either,
            AssociationPolicy::Both => LabelFailure::Both,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelFailure {
    AccessibleLabel,
    HtmlFor,
    Nesting,
    Either,
    Both,
}

impl LabelFailure {
    pub fn message(self) -> &'static str {
        match self {
            LabelFailure::AccessibleLabel => "A form label must have accessible text.",
            LabelFailure::HtmlFor => "A form label must have a valid htmlFor attribute.",
            LabelFailure::Nesting => "A form label must have an associated control as a descendant.",
            LabelFailure::Either => {
                "A form label must either have a valid htmlFor attribute or a control as a descendant."
            }
            LabelFailure::Both => {
                "A form label must have a valid htmlFor attribute and a control as a descendant."
            }
        }
    }
}

impl fmt::Display for LabelFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelOutcome {
    Pass,
    /// The label could not be fully evaluated because it relies on
    /// components with unknown semantics. Callers treat this as a pass.
    Indeterminate,
    Fail(LabelFailure),
}

/// The label carries a `for`-role attribute or a direct `aria-label` /
/// `aria-labelledby` that supplies a value.
pub fn has_pointer_association(label: &MarkupNode, config: &AliasConfig) -> bool {
    config
        .role_values(label, AttributeRole::For)
        .any(AttrValue::supplies_value)
        || has_direct_label(label)
}

/// Whether a descendant within `depth_budget` levels is a form control.
/// Hidden inputs never count.
pub fn has_nested_control(label: &MarkupNode, config: &AliasConfig, depth_budget: usize) -> bool {
    let mut worklist: Vec<(&MarkupNode, usize)> = label.element_children().map(|c| (c, 1)).collect();

    while let Some((node, depth)) = worklist.pop() {
        if depth > depth_budget {
            continue;
        }
        if is_control(node, config) {
            return true;
        }
        worklist.extend(node.element_children().map(|c| (c, depth + 1)));
    }

    false
}

fn is_control(node: &MarkupNode, config: &AliasConfig) -> bool {
    config
        .resolve_tag(node.name())
        .is_some_and(|tag| CONTROL_TAGS.contains(&tag))
        && !is_hidden_input(node, config)
}

/// Run the association state machine for one label element.
pub fn evaluate(
    label: &MarkupNode,
    config: &AliasConfig,
    policy: AssociationPolicy,
    depth_budget: usize,
) -> LabelOutcome {
    let text = scan_accessible_content(label, config, depth_budget);
    if text == Content::Absent {
        return LabelOutcome::Fail(LabelFailure::AccessibleLabel);
    }

    let pointer = has_pointer_association(label, config);
    let nested = has_nested_control(label, config, depth_budget);
    log::trace!(
        "Label '{}': text={:?} pointer={} nested={} policy={:?}",
        label.name(),
        text,
        pointer,
        nested,
        policy
    );

    if policy.is_satisfied(pointer, nested) {
        return match text {
            Content::Present => LabelOutcome::Pass,
            _ => LabelOutcome::Indeterminate,
        };
    }

    // An opaque component standing in for the label text may also render
    // the control, so a missing nested control is not proof of failure.
    if text == Content::Indeterminate && policy.is_satisfied(pointer, true) {
        return LabelOutcome::Indeterminate;
    }

    LabelOutcome::Fail(policy.failure())
}
