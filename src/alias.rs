//! Component and attribute alias resolution.
//!
//! Two layers are consulted: the option layer built from one rule's options,
//! then the settings layer shared by the whole project. Within a layer exact
//! literal keys are tried before glob keys, and glob keys are tried in
//! declaration order.

use std::fmt;

use serde::Deserialize;
use serde::de::{self, MapAccess, Visitor};

use crate::glob::NamePattern;
use crate::syntax::{AttrValue, MarkupNode, is_native_tag};

/// Ordered mapping from component-name pattern to native tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentMap {
    entries: Vec<(NamePattern, String)>,
}

impl ComponentMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pattern: &str, tag: impl Into<String>) -> Result<(), regex::Error> {
        self.push(NamePattern::new(pattern)?, tag);
        Ok(())
    }

    pub fn push(&mut self, pattern: NamePattern, tag: impl Into<String>) {
        self.entries.push((pattern, tag.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Exact keys first, then the first glob key that matches.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        let exact = self
            .entries
            .iter()
            .find(|(pattern, _)| pattern.is_exact() && pattern.matches(name));
        let found = exact.or_else(|| {
            self.entries
                .iter()
                .find(|(pattern, _)| !pattern.is_exact() && pattern.matches(name))
        });
        found.map(|(_, tag)| tag.as_str())
    }
}

impl<'de> Deserialize<'de> for ComponentMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct ComponentMapVisitor;

        impl<'de> Visitor<'de> for ComponentMapVisitor {
            type Value = ComponentMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a table of component patterns to tag names")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = ComponentMap::new();
                while let Some((pattern, tag)) = access.next_entry::<String, String>()? {
                    map.insert(&pattern, tag).map_err(|e| {
                        de::Error::custom(format!("invalid component pattern '{pattern}': {e}"))
                    })?;
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(ComponentMapVisitor)
    }
}

/// A semantic role an attribute can play. Each role has built-in names that
/// apply when neither layer configures the role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeRole {
    /// Points a label at a control id.
    For,
    /// Supplies an accessible name directly.
    Label,
    /// Injects raw markup.
    InnerHtml,
    /// Supplies children through a prop.
    Children,
}

impl AttributeRole {
    pub const ALL: [AttributeRole; 4] = [
        AttributeRole::For,
        AttributeRole::Label,
        AttributeRole::InnerHtml,
        AttributeRole::Children,
    ];

    /// Key used in configuration tables.
    pub fn key(self) -> &'static str {
        match self {
            AttributeRole::For => "for",
            AttributeRole::Label => "label",
            AttributeRole::InnerHtml => "inner-html",
            AttributeRole::Children => "children",
        }
    }

    pub fn default_names(self) -> &'static [&'static str] {
        match self {
            AttributeRole::For => &["htmlFor"],
            AttributeRole::Label => &["alt", "aria-label", "aria-labelledby"],
            AttributeRole::InnerHtml => &["dangerouslySetInnerHTML"],
            AttributeRole::Children => &["children"],
        }
    }
}

/// Ordered mapping from role key to accepted attribute names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    roles: Vec<(String, Vec<NamePattern>)>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the accepted names for a role, replacing an earlier entry.
    pub fn set(&mut self, role: &str, names: Vec<NamePattern>) {
        match self.roles.iter_mut().find(|(key, _)| key == role) {
            Some((_, existing)) => *existing = names,
            None => self.roles.push((role.to_string(), names)),
        }
    }

    pub fn get(&self, role: &str) -> Option<&[NamePattern]> {
        self.roles
            .iter()
            .find(|(key, _)| key == role)
            .map(|(_, names)| names.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl<'de> Deserialize<'de> for AttributeMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct AttributeMapVisitor;

        impl<'de> Visitor<'de> for AttributeMapVisitor {
            type Value = AttributeMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a table of attribute roles to lists of attribute names")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = AttributeMap::new();
                while let Some((role, names)) = access.next_entry::<String, Vec<NamePattern>>()? {
                    map.set(&role, names);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(AttributeMapVisitor)
    }
}

/// Names accepted for one role, from whichever layer defined it.
#[derive(Debug, Clone, Copy)]
pub enum RoleNames<'a> {
    Configured(&'a [NamePattern]),
    Builtin(&'static [&'static str]),
}

impl RoleNames<'_> {
    /// Attribute names compare ASCII case-insensitively for literals; glob
    /// entries stay case-sensitive.
    pub fn accepts(&self, attribute: &str) -> bool {
        match self {
            RoleNames::Configured(patterns) => {
                patterns.iter().any(|p| match p {
                    NamePattern::Exact(name) => name.eq_ignore_ascii_case(attribute),
                    NamePattern::Glob(glob) => glob.is_match(attribute),
                })
            }
            RoleNames::Builtin(names) => names.iter().any(|n| n.eq_ignore_ascii_case(attribute)),
        }
    }

    pub fn to_patterns(&self) -> Vec<NamePattern> {
        match self {
            RoleNames::Configured(patterns) => patterns.to_vec(),
            RoleNames::Builtin(names) => names
                .iter()
                .map(|name| NamePattern::Exact(name.to_string()))
                .collect(),
        }
    }
}

/// One configuration layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AliasLayer {
    pub components: ComponentMap,
    pub attributes: AttributeMap,
}

impl AliasLayer {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The two layers a rule resolves names against.
#[derive(Debug, Clone, Copy)]
pub struct AliasConfig<'a> {
    options: &'a AliasLayer,
    settings: &'a AliasLayer,
}

impl<'a> AliasConfig<'a> {
    pub fn new(options: &'a AliasLayer, settings: &'a AliasLayer) -> Self {
        Self { options, settings }
    }

    /// Resolve a tag or component name to the native tag it stands for.
    ///
    /// Native tags are returned unchanged. Returns `None` for custom
    /// components no layer maps.
    pub fn resolve_tag<'n>(&self, name: &'n str) -> Option<&'n str>
    where
        'a: 'n,
    {
        if is_native_tag(name) {
            return Some(name);
        }
        let resolved = self
            .options
            .components
            .lookup(name)
            .or_else(|| self.settings.components.lookup(name));
        log::trace!("Resolved component '{}' to {:?}", name, resolved);
        resolved
    }

    /// The names that count for `role`: the option layer's list if it defines
    /// the role, else the settings layer's, else the built-ins.
    pub fn role_names(&self, role: AttributeRole) -> RoleNames<'a> {
        let key = role.key();
        self.options
            .attributes
            .get(key)
            .or_else(|| self.settings.attributes.get(key))
            .map(RoleNames::Configured)
            .unwrap_or(RoleNames::Builtin(role.default_names()))
    }

    pub fn has_role(&self, attribute: &str, role: AttributeRole) -> bool {
        self.role_names(role).accepts(attribute)
    }

    /// Values of every attribute on `node` playing `role`, in attribute order.
    pub fn role_values<'n>(
        &self,
        node: &'n MarkupNode,
        role: AttributeRole,
    ) -> impl Iterator<Item = &'n AttrValue> + use<'n, 'a> {
        let names = self.role_names(role);
        node.attributes()
            .iter()
            .filter(move |attr| !attr.is_spread() && names.accepts(&attr.name))
            .map(|attr| &attr.value)
    }
}

/// Free-function form of [`AliasConfig::resolve_tag`].
pub fn resolve_tag<'n>(name: &'n str, config: &AliasConfig<'n>) -> Option<&'n str> {
    config.resolve_tag(name)
}
