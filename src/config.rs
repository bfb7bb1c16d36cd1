use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::alias::{AliasConfig, AliasLayer, AttributeRole};
use crate::glob::NamePattern;
use crate::label::AssociationPolicy;

/// Hard cap on any configured depth budget.
pub const MAX_DEPTH: usize = 25;

/// Options for `label-has-associated-control`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LabelControlOptions {
    /// Required relationship between a label and its control
    pub assert: AssociationPolicy,
    /// Descendant search depth (default: 2)
    pub depth: Option<usize>,
    /// Components treated as `label`
    pub label_components: Vec<NamePattern>,
    /// Attributes that supply label text, in addition to the built-ins
    pub label_attributes: Vec<NamePattern>,
    /// Components treated as form controls
    pub control_components: Vec<NamePattern>,
}

impl LabelControlOptions {
    pub const DEFAULT_DEPTH: usize = 2;

    pub fn depth(&self) -> usize {
        self.depth.unwrap_or(Self::DEFAULT_DEPTH).min(MAX_DEPTH)
    }

    /// Option layer: label components map to `label`, control components to
    /// `input`, and label attributes extend the label role `settings` would
    /// otherwise give.
    pub fn alias_layer(&self, settings: &AliasLayer) -> AliasLayer {
        let mut layer = AliasLayer::new();
        for pattern in &self.label_components {
            layer.components.push(pattern.clone(), "label");
        }
        for pattern in &self.control_components {
            layer.components.push(pattern.clone(), "input");
        }
        if !self.label_attributes.is_empty() {
            let inherited = AliasLayer::new();
            let mut names = AliasConfig::new(&inherited, settings)
                .role_names(AttributeRole::Label)
                .to_patterns();
            names.extend(self.label_attributes.iter().cloned());
            layer.attributes.set(AttributeRole::Label.key(), names);
        }
        layer
    }
}

/// Options for `heading-has-content`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct HeadingOptions {
    /// Components treated as headings
    pub components: Vec<NamePattern>,
    /// Descendant search depth (default: 5)
    pub depth: Option<usize>,
}

impl HeadingOptions {
    pub const DEFAULT_DEPTH: usize = 5;

    pub fn depth(&self) -> usize {
        self.depth.unwrap_or(Self::DEFAULT_DEPTH).min(MAX_DEPTH)
    }

    pub fn alias_layer(&self) -> AliasLayer {
        let mut layer = AliasLayer::new();
        for pattern in &self.components {
            layer.components.push(pattern.clone(), "h1");
        }
        layer
    }
}

/// Options for `aria-props`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AriaPropsOptions {
    pub max_suggestions: usize,
    pub max_distance: usize,
}

impl Default for AriaPropsOptions {
    fn default() -> Self {
        Self {
            max_suggestions: 2,
            max_distance: 2,
        }
    }
}

/// Options for `img-redundant-alt`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ImgRedundantAltOptions {
    /// Components treated as `img`
    pub components: Vec<NamePattern>,
    /// Words reported in addition to image, photo and picture
    pub words: Vec<String>,
}

impl ImgRedundantAltOptions {
    pub fn alias_layer(&self) -> AliasLayer {
        let mut layer = AliasLayer::new();
        for pattern in &self.components {
            layer.components.push(pattern.clone(), "img");
        }
        layer
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RuleOptions {
    pub label_has_associated_control: LabelControlOptions,
    pub heading_has_content: HeadingOptions,
    pub aria_props: AriaPropsOptions,
    pub img_redundant_alt: ImgRedundantAltOptions,
    /// Rule names to skip
    pub disabled: Vec<String>,
}

/// Project-wide configuration: the settings alias layer plus rule options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(flatten)]
    pub settings: AliasLayer,
    pub rules: RuleOptions,
}

impl Config {
    pub fn is_enabled(&self, rule: &str) -> bool {
        !self.rules.disabled.iter().any(|name| name == rule)
    }
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
    components: Vec<(String, String)>,
    attributes: Vec<(String, Vec<String>)>,
}

impl ConfigBuilder {
    pub fn component(mut self, pattern: impl Into<String>, tag: impl Into<String>) -> Self {
        self.components.push((pattern.into(), tag.into()));
        self
    }

    pub fn attribute_names<I, S>(mut self, role: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes
            .push((role.into(), names.into_iter().map(Into::into).collect()));
        self
    }

    pub fn label_control(mut self, options: LabelControlOptions) -> Self {
        self.config.rules.label_has_associated_control = options;
        self
    }

    pub fn heading(mut self, options: HeadingOptions) -> Self {
        self.config.rules.heading_has_content = options;
        self
    }

    pub fn aria_props(mut self, options: AriaPropsOptions) -> Self {
        self.config.rules.aria_props = options;
        self
    }

    pub fn img_redundant_alt(mut self, options: ImgRedundantAltOptions) -> Self {
        self.config.rules.img_redundant_alt = options;
        self
    }

    pub fn disable(mut self, rule: impl Into<String>) -> Self {
        self.config.rules.disabled.push(rule.into());
        self
    }

    /// Compile the configured patterns.
    pub fn build(self) -> io::Result<Config> {
        let mut config = self.config;
        for (pattern, tag) in self.components {
            config
                .settings
                .components
                .insert(&pattern, tag)
                .map_err(|e| invalid_pattern(&pattern, e))?;
        }
        for (role, names) in self.attributes {
            let patterns = names
                .iter()
                .map(|name| NamePattern::new(name).map_err(|e| invalid_pattern(name, e)))
                .collect::<io::Result<Vec<_>>>()?;
            config.settings.attributes.set(&role, patterns);
        }
        Ok(config)
    }
}

fn invalid_pattern(pattern: &str, e: regex::Error) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("invalid pattern '{pattern}': {e}"),
    )
}

/// Parse configuration that the host already read from `path`. JSON when the
/// extension is `.json`, TOML otherwise.
pub fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        serde_json::from_str::<Config>(s).map_err(|e| e.to_string())
    } else {
        toml::from_str::<Config>(s).map_err(|e| e.to_string())
    };

    let config = parsed.map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {e}", path.display()),
        )
    })?;
    log::debug!("Parsed config from: {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Config {
        parse_config_str(s, Path::new("a11ylint.toml")).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse("");
        assert!(config.settings.components.is_empty());
        assert_eq!(
            config.rules.label_has_associated_control.assert,
            AssociationPolicy::Either
        );
        assert_eq!(config.rules.label_has_associated_control.depth(), 2);
        assert_eq!(config.rules.heading_has_content.depth(), 5);
        assert_eq!(config.rules.aria_props.max_suggestions, 2);
        assert_eq!(config.rules.aria_props.max_distance, 2);
    }

    #[test]
    fn test_full_toml() {
        let config = parse(
            r#"
            [components]
            CustomInput = "input"
            "*Label" = "label"

            [attributes]
            for = ["htmlFor", "for"]

            [rules]
            disabled = ["aria-props"]

            [rules.label-has-associated-control]
            assert = "htmlFor"
            depth = 4
            label-components = ["CustomLabel"]
            label-attributes = ["label"]
            control-components = ["Custom*"]

            [rules.heading-has-content]
            components = ["Heading", "Title"]
            depth = 100

            [rules.img-redundant-alt]
            components = ["Image"]
            words = ["Word1", "Word2"]
            "#,
        );

        assert_eq!(config.settings.components.len(), 2);
        assert_eq!(config.settings.components.lookup("MUILabel"), Some("label"));
        let label = &config.rules.label_has_associated_control;
        assert_eq!(label.assert, AssociationPolicy::HtmlFor);
        assert_eq!(label.depth(), 4);
        assert_eq!(label.control_components[0].as_str(), "Custom*");
        assert_eq!(config.rules.heading_has_content.depth(), MAX_DEPTH);
        assert!(!config.is_enabled("aria-props"));
        assert!(config.is_enabled("heading-has-content"));

        let options = label.alias_layer(&config.settings);
        let aliases = AliasConfig::new(&options, &config.settings);
        assert!(aliases.has_role("for", AttributeRole::For));
        assert!(aliases.has_role("label", AttributeRole::Label));
        assert!(aliases.has_role("aria-label", AttributeRole::Label));
        assert_eq!(aliases.resolve_tag("CustomLabel"), Some("label"));
        assert_eq!(aliases.resolve_tag("CustomSelect"), Some("input"));

        let img = &config.rules.img_redundant_alt;
        assert_eq!(img.words, ["Word1", "Word2"]);
        let options = img.alias_layer();
        let aliases = AliasConfig::new(&options, &config.settings);
        assert_eq!(aliases.resolve_tag("Image"), Some("img"));
    }

    #[test]
    fn test_label_attributes_extend_settings() {
        let config = parse(
            r#"
            [attributes]
            label = ["title"]

            [rules.label-has-associated-control]
            label-attributes = ["caption"]
            "#,
        );

        let options = config
            .rules
            .label_has_associated_control
            .alias_layer(&config.settings);
        let aliases = AliasConfig::new(&options, &config.settings);
        assert!(aliases.has_role("title", AttributeRole::Label));
        assert!(aliases.has_role("caption", AttributeRole::Label));
        // the project list already replaced the built-ins
        assert!(!aliases.has_role("alt", AttributeRole::Label));
    }

    #[test]
    fn test_component_order_is_preserved() {
        let config = parse(
            r#"
            [components]
            "Custom*" = "label"
            "*Input" = "input"
            "#,
        );
        assert_eq!(config.settings.components.lookup("CustomInput"), Some("label"));
    }

    #[test]
    fn test_json_settings() {
        let config = parse_config_str(
            r#"{"components": {"Image": "img"}, "rules": {"aria-props": {"max-distance": 3}}}"#,
            Path::new("settings.json"),
        )
        .unwrap();
        assert_eq!(config.settings.components.lookup("Image"), Some("img"));
        assert_eq!(config.rules.aria_props.max_distance, 3);
        assert_eq!(config.rules.aria_props.max_suggestions, 2);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = parse_config_str(
            "[rules.label-has-associated-control]\nassert = \"sometimes\"\n",
            Path::new("a11ylint.toml"),
        )
        .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("a11ylint.toml"));
    }

    #[test]
    fn test_builder() {
        let config = ConfigBuilder::default()
            .component("Title", "h1")
            .attribute_names("for", ["htmlFor", "for"])
            .disable("aria-props")
            .build()
            .unwrap();

        assert_eq!(config.settings.components.lookup("Title"), Some("h1"));
        assert!(config.settings.attributes.get("for").is_some());
        assert!(!config.is_enabled("aria-props"));
    }
}
