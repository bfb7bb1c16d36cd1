//! Bounded-depth search for content a screen reader would announce.

use crate::alias::{AliasConfig, AttributeRole};
use crate::syntax::{AttrValue, Child, Expression, MarkupNode};

/// Outcome of a content search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content {
    /// Some text or text alternative was found.
    Present,
    /// Nothing definite was found, but a spread attribute or an unknown
    /// custom component could supply content.
    Indeterminate,
    /// Nothing within the depth budget can supply content.
    Absent,
}

impl Content {
    /// Conservative reading: only a definite absence counts as missing.
    pub fn is_possible(self) -> bool {
        self != Content::Absent
    }
}

/// Whether `node` has accessible content within `depth_budget` levels.
///
/// Indeterminate results count as content, so a rule built on this never
/// reports a node it could not fully evaluate.
pub fn has_accessible_content(node: &MarkupNode, config: &AliasConfig, depth_budget: usize) -> bool {
    scan_accessible_content(node, config, depth_budget).is_possible()
}

/// Search `node` and its descendants for accessible content.
///
/// The root sits at depth 0. A node's children are inspected only while its
/// depth is below `depth_budget`. Descendants hidden from screen readers are
/// skipped with their subtrees; the root's own hidden flag is left to the
/// caller.
pub fn scan_accessible_content(
    node: &MarkupNode,
    config: &AliasConfig,
    depth_budget: usize,
) -> Content {
    let mut result = Content::Absent;
    let mut worklist = vec![(node, 0usize)];

    while let Some((current, depth)) = worklist.pop() {
        let is_root = depth == 0;
        if is_hidden_input(current, config)
            || (!is_root && is_hidden_from_screen_reader(current, config))
        {
            continue;
        }

        match text_alternative(current, config) {
            Content::Present => return Content::Present,
            Content::Indeterminate => result = Content::Indeterminate,
            Content::Absent => {}
        }

        if !is_root && current.children().is_empty() && is_unknown_component(current, config) {
            log::trace!("Cannot see inside component '{}'", current.name());
            result = Content::Indeterminate;
            continue;
        }

        if depth >= depth_budget {
            continue;
        }

        let mut nested = Vec::new();
        for child in current.children() {
            match child {
                Child::Text(text) if !text.trim().is_empty() => return Content::Present,
                Child::Text(_) => {}
                Child::Expression(Expression::Unresolved) => return Content::Present,
                Child::Expression(Expression::Undefined) => {}
                Child::Element(element) => nested.push((element, depth + 1)),
            }
        }
        // document order
        worklist.extend(nested.into_iter().rev());
    }

    result
}

/// Attributes that name an element however the label role is configured.
pub const DIRECT_LABEL_ATTRIBUTES: &[&str] = &["aria-label", "aria-labelledby"];

/// A direct `aria-label` or `aria-labelledby` that supplies a value.
pub fn has_direct_label(node: &MarkupNode) -> bool {
    DIRECT_LABEL_ATTRIBUTES
        .iter()
        .filter_map(|name| node.attribute(name))
        .any(AttrValue::supplies_value)
}

/// Text supplied by the node's own attributes.
fn text_alternative(node: &MarkupNode, config: &AliasConfig) -> Content {
    const ROLES: [AttributeRole; 3] = [
        AttributeRole::Label,
        AttributeRole::InnerHtml,
        AttributeRole::Children,
    ];
    let supplied = has_direct_label(node)
        || ROLES
            .into_iter()
            .any(|role| config.role_values(node, role).any(AttrValue::supplies_value));

    if supplied {
        Content::Present
    } else if node.has_spread() {
        Content::Indeterminate
    } else {
        Content::Absent
    }
}

/// An element no layer maps to native semantics.
pub fn is_unknown_component(node: &MarkupNode, config: &AliasConfig) -> bool {
    node.is_element() && config.resolve_tag(node.name()).is_none()
}

/// An element resolving to `input` with a literal `type="hidden"`.
pub fn is_hidden_input(node: &MarkupNode, config: &AliasConfig) -> bool {
    config.resolve_tag(node.name()) == Some("input")
        && node
            .attribute("type")
            .and_then(AttrValue::as_str)
            .is_some_and(|ty| ty.eq_ignore_ascii_case("hidden"))
}

/// Hidden inputs, and elements whose `aria-hidden` is truthy or could be.
pub fn is_hidden_from_screen_reader(node: &MarkupNode, config: &AliasConfig) -> bool {
    is_hidden_input(node, config)
        || node
            .attribute("aria-hidden")
            .is_some_and(AttrValue::is_truthy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::AliasLayer;
    use crate::syntax::MarkupNode as N;

    fn with_config<R>(f: impl FnOnce(&AliasConfig) -> R) -> R {
        crate::init_logger();
        let empty = AliasLayer::new();
        f(&AliasConfig::new(&empty, &empty))
    }

    fn scan(node: &N, budget: usize) -> Content {
        with_config(|config| scan_accessible_content(node, config, budget))
    }

    #[test]
    fn test_whitespace_text_is_not_content() {
        let node = N::element("h1").text("   \n\t");
        assert_eq!(scan(&node, 1), Content::Absent);
    }

    #[test]
    fn test_single_character_is_content() {
        let node = N::element("h1").text("  x ");
        assert_eq!(scan(&node, 1), Content::Present);
    }

    #[test]
    fn test_undefined_expression_is_not_content() {
        let node = N::element("h1").expression(Expression::Undefined);
        assert_eq!(scan(&node, 1), Content::Absent);

        let node = N::element("h1").expression(Expression::Unresolved);
        assert_eq!(scan(&node, 1), Content::Present);
    }

    #[test]
    fn test_zero_budget_never_inspects_children() {
        let node = N::element("h1").text("Foo");
        assert_eq!(scan(&node, 0), Content::Absent);

        let node = N::element("h1").attr("aria-label", "Foo");
        assert_eq!(scan(&node, 0), Content::Present);
    }

    #[test]
    fn test_depth_is_bounded() {
        let node = N::element("h1").child(N::element("span").child(N::element("span").text("deep")));
        assert_eq!(scan(&node, 2), Content::Absent);
        assert_eq!(scan(&node, 3), Content::Present);
    }

    #[test]
    fn test_text_alternative_attributes() {
        assert_eq!(scan(&N::element("h1").attr("aria-label", ""), 1), Content::Absent);
        assert_eq!(
            scan(&N::element("h1").attr("dangerouslySetInnerHTML", Expression::Unresolved), 1),
            Content::Present
        );
        assert_eq!(
            scan(&N::element("h1").attr("children", Expression::Unresolved), 1),
            Content::Present
        );
        assert_eq!(
            scan(&N::element("h1").child(N::element("img").attr("alt", "Logo")), 1),
            Content::Present
        );
    }

    #[test]
    fn test_hidden_descendants_are_skipped() {
        let node = N::element("h1").child(N::element("span").flag("aria-hidden").text("Foo"));
        assert_eq!(scan(&node, 3), Content::Absent);

        let node = N::element("h1").child(N::element("span").attr("aria-hidden", false).text("Foo"));
        assert_eq!(scan(&node, 3), Content::Present);

        // could be hidden, so not assumed accessible
        let node = N::element("h1").child(
            N::element("span")
                .attr("aria-hidden", Expression::Unresolved)
                .text("Foo"),
        );
        assert_eq!(scan(&node, 3), Content::Absent);
    }

    #[test]
    fn test_root_hidden_flag_is_ignored() {
        let node = N::element("h1").flag("aria-hidden").text("Foo");
        assert_eq!(scan(&node, 1), Content::Present);
    }

    #[test]
    fn test_hidden_input_is_not_content() {
        let node = N::element("h1").child(N::element("input").attr("type", "hidden"));
        assert_eq!(scan(&node, 2), Content::Absent);
    }

    #[test]
    fn test_aliased_hidden_input() {
        let node = N::element("h1").child(N::element("CustomInput").attr("type", "hidden"));
        assert_eq!(scan(&node, 2), Content::Indeterminate);

        let mut settings = AliasLayer::new();
        settings.components.insert("CustomInput", "input").unwrap();
        let options = AliasLayer::new();
        let config = AliasConfig::new(&options, &settings);
        assert_eq!(scan_accessible_content(&node, &config, 2), Content::Absent);
    }

    #[test]
    fn test_unknown_leaf_component_is_indeterminate() {
        let node = N::element("h1").child(N::element("Bar"));
        assert_eq!(scan(&node, 1), Content::Indeterminate);
        assert!(with_config(|config| has_accessible_content(&node, config, 1)));

        let node = N::element("h1").child(N::element("Bar").flag("aria-hidden"));
        assert_eq!(scan(&node, 1), Content::Absent);
    }

    #[test]
    fn test_configured_label_role_keeps_aria_label() {
        let mut settings = AliasLayer::new();
        settings
            .attributes
            .set("label", vec![crate::glob::NamePattern::new("label").unwrap()]);
        let options = AliasLayer::new();
        let config = AliasConfig::new(&options, &settings);

        let node = N::element("h1").attr("aria-label", "Foo");
        assert_eq!(scan_accessible_content(&node, &config, 5), Content::Present);
        assert!(has_accessible_content(&node, &config, 5));

        let node = N::element("h1").attr("label", "Foo");
        assert_eq!(scan_accessible_content(&node, &config, 5), Content::Present);

        // the configured list replaces the built-in `alt`
        let node = N::element("h1").attr("alt", "Foo");
        assert_eq!(scan_accessible_content(&node, &config, 5), Content::Absent);
    }

    #[test]
    fn test_spread_is_indeterminate() {
        let node = N::element("h1").child(N::element("span").spread("props"));
        assert_eq!(scan(&node, 2), Content::Indeterminate);
    }

    #[test]
    fn test_present_wins_over_indeterminate() {
        let node = N::element("h1").child(N::element("Bar")).text("Title");
        assert_eq!(scan(&node, 1), Content::Present);
    }

    #[test]
    fn test_fragment_children_are_searched() {
        let node = N::element("h1").child(N::fragment().text("Foo"));
        assert_eq!(scan(&node, 2), Content::Present);
    }

    #[test]
    fn test_idempotent() {
        let node = N::element("h1").child(N::element("span").text("Foo"));
        assert_eq!(scan(&node, 2), scan(&node, 2));
    }
}
