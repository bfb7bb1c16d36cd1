use rowan::TextRange;
use serde::Deserialize;

/// Statically known value of an expression, either a child `{...}` or an
/// attribute `name={...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expression {
    /// The literal identifier `undefined`, which renders nothing.
    Undefined,
    /// Anything the host could not evaluate.
    Unresolved,
}

/// Classified attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttrValue {
    /// `name="text"` or `name={"text"}`
    String(String),
    /// `name` (true), `name={false}`
    Bool(bool),
    /// `name={expr}`
    Expression(Expression),
    /// `{...props}`; the attribute's name holds the spread argument.
    Spread,
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Whether the value may supply text: a non-empty literal string, or an
    /// expression that could evaluate to one.
    pub fn supplies_value(&self) -> bool {
        match self {
            AttrValue::String(s) => !s.is_empty(),
            AttrValue::Expression(Expression::Unresolved) => true,
            AttrValue::Expression(Expression::Undefined) | AttrValue::Bool(_) | AttrValue::Spread => {
                false
            }
        }
    }

    /// Truthiness as a JSX boolean prop. Unresolved expressions count as
    /// truthy; callers that need the strict reading match on the variant.
    pub fn is_truthy(&self) -> bool {
        match self {
            AttrValue::Bool(b) => *b,
            AttrValue::String(s) => s.eq_ignore_ascii_case("true"),
            AttrValue::Expression(Expression::Unresolved) => true,
            AttrValue::Expression(Expression::Undefined) | AttrValue::Spread => false,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::String(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::String(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<Expression> for AttrValue {
    fn from(value: Expression) -> Self {
        AttrValue::Expression(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: AttrValue,
    #[serde(default)]
    pub range: Option<TextRange>,
}

impl Attribute {
    pub fn is_spread(&self) -> bool {
        matches!(self.value, AttrValue::Spread)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Child {
    Element(MarkupNode),
    Text(String),
    Expression(Expression),
}

/// One element (or fragment, when the name is empty) of the host's tree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct MarkupNode {
    name: String,
    attributes: Vec<Attribute>,
    children: Vec<Child>,
    range: Option<TextRange>,
}

impl MarkupNode {
    pub fn element(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// `<>...</>`
    pub fn fragment() -> Self {
        Self::default()
    }

    // ----- builder -----

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.push(Attribute {
            name: name.into(),
            value: value.into(),
            range: None,
        });
        self
    }

    /// Valueless attribute, e.g. `<h1 aria-hidden />`.
    pub fn flag(self, name: impl Into<String>) -> Self {
        self.attr(name, true)
    }

    pub fn spread(mut self, argument: impl Into<String>) -> Self {
        self.attributes.push(Attribute {
            name: argument.into(),
            value: AttrValue::Spread,
            range: None,
        });
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn child(mut self, child: MarkupNode) -> Self {
        self.children.push(Child::Element(child));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Child::Text(text.into()));
        self
    }

    pub fn expression(mut self, expression: Expression) -> Self {
        self.children.push(Child::Expression(expression));
        self
    }

    pub fn with_range(mut self, range: TextRange) -> Self {
        self.range = Some(range);
        self
    }

    // ----- accessors -----

    /// Tag or component name; empty for fragments.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_element(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn range(&self) -> Option<TextRange> {
        self.range
    }

    pub fn has_spread(&self) -> bool {
        self.attributes.iter().any(Attribute::is_spread)
    }

    /// First non-spread attribute named `name`, compared ASCII
    /// case-insensitively as JSX props are.
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes
            .iter()
            .find(|attr| !attr.is_spread() && attr.name.eq_ignore_ascii_case(name))
            .map(|attr| &attr.value)
    }

    pub fn element_children(&self) -> impl Iterator<Item = &MarkupNode> {
        self.children.iter().filter_map(|child| match child {
            Child::Element(node) => Some(node),
            _ => None,
        })
    }

    /// Pre-order iterator over this node and every nested element.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a MarkupNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a MarkupNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let start = self.stack.len();
        self.stack.extend(node.element_children());
        self.stack[start..].reverse();
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_lookup_ignores_case_and_spreads() {
        let node = MarkupNode::element("img")
            .spread("alt")
            .attr("ALt", "foo");

        assert_eq!(node.attribute("alt"), Some(&AttrValue::from("foo")));
        assert!(node.has_spread());
        assert_eq!(node.attribute("src"), None);
    }

    #[test]
    fn test_supplies_value() {
        assert!(AttrValue::from("x").supplies_value());
        assert!(!AttrValue::from("").supplies_value());
        assert!(AttrValue::Expression(Expression::Unresolved).supplies_value());
        assert!(!AttrValue::Expression(Expression::Undefined).supplies_value());
        assert!(!AttrValue::Bool(true).supplies_value());
    }

    #[test]
    fn test_truthiness() {
        assert!(AttrValue::Bool(true).is_truthy());
        assert!(AttrValue::from("true").is_truthy());
        assert!(!AttrValue::from("false").is_truthy());
        assert!(!AttrValue::Bool(false).is_truthy());
        assert!(!AttrValue::Expression(Expression::Undefined).is_truthy());
    }

    #[test]
    fn test_descendants_preorder() {
        let tree = MarkupNode::element("div")
            .child(MarkupNode::element("label").child(MarkupNode::element("span")))
            .text("between")
            .child(MarkupNode::element("input"));

        let names: Vec<_> = tree.descendants().map(MarkupNode::name).collect();
        assert_eq!(names, vec!["div", "label", "span", "input"]);
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{
            "name": "label",
            "attributes": [
                {"name": "htmlFor", "value": {"string": "js_id"}},
                {"name": "props", "value": "spread"}
            ],
            "children": [
                {"text": "A label"},
                {"expression": "undefined"},
                {"element": {"name": "input"}}
            ]
        }"#;
        let node: MarkupNode = serde_json::from_str(json).unwrap();

        assert_eq!(node.name(), "label");
        assert_eq!(node.attribute("htmlFor").and_then(AttrValue::as_str), Some("js_id"));
        assert!(node.has_spread());
        assert_eq!(node.children().len(), 3);
        assert_eq!(node.element_children().next().map(MarkupNode::name), Some("input"));
    }
}
