use crate::alias::AliasConfig;
use crate::config::Config;
use crate::content::is_hidden_from_screen_reader;
use crate::linter::diagnostics::{Diagnostic, Location};
use crate::linter::rules::Rule;
use crate::syntax::{AttrValue, MarkupNode};

const MESSAGE: &str = "Redundant alt attribute. Screen-readers already announce `img` tags as an image. You don’t need to use the words `image`, `photo,` or `picture` (or any specified custom words) in the alt prop.";

const REDUNDANT_WORDS: &[&str] = &["image", "photo", "picture"];

pub struct ImgRedundantAltRule;

impl Rule for ImgRedundantAltRule {
    fn name(&self) -> &str {
        "img-redundant-alt"
    }

    fn check(&self, tree: &MarkupNode, input: &str, config: &Config) -> Vec<Diagnostic> {
        let rule_options = &config.rules.img_redundant_alt;
        let options = rule_options.alias_layer();
        let aliases = AliasConfig::new(&options, &config.settings);
        let words: Vec<String> = REDUNDANT_WORDS
            .iter()
            .map(|word| word.to_string())
            .chain(rule_options.words.iter().map(|word| word.to_lowercase()))
            .collect();

        tree.descendants()
            .filter(|node| node.is_element() && aliases.resolve_tag(node.name()) == Some("img"))
            .filter(|node| !is_hidden_from_screen_reader(node, &aliases))
            .filter(|node| {
                node.attribute("alt")
                    .and_then(AttrValue::as_str)
                    .is_some_and(|alt| contains_redundant_word(alt, &words))
            })
            .map(|node| Diagnostic::error(Location::from_node(node, input), self.name(), MESSAGE))
            .collect()
    }
}

/// Values with any ASCII character are compared word by word, so "Photography"
/// passes. Others, such as Japanese text without spaces, are searched for the
/// word anywhere.
fn contains_redundant_word(value: &str, words: &[String]) -> bool {
    let value = value.to_lowercase();
    if value.chars().any(|c| matches!(c, '\u{20}'..='\u{7f}')) {
        value
            .split_whitespace()
            .any(|token| words.iter().any(|word| word == token))
    } else {
        words.iter().any(|word| value.contains(word.as_str()))
    }
}
