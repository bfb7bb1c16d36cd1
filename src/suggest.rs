//! Near-miss suggestions for unknown attribute names.

pub mod aria;

pub use aria::ARIA_PROPERTIES;

/// An immutable, ordered set of canonical names.
///
/// The declaration order is the canonical order used to break ties between
/// equally distant suggestions.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    names: &'static [&'static str],
}

impl Vocabulary {
    pub const fn new(names: &'static [&'static str]) -> Self {
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + use<> {
        let names = self.names;
        names.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Rank vocabulary entries by Levenshtein distance to `token`.
///
/// Entries further than `max_distance` are dropped; the rest are ordered by
/// distance, then by vocabulary order, and truncated to `max_results`.
/// Comparison ignores case.
pub fn suggest(
    token: &str,
    vocabulary: &Vocabulary,
    max_results: usize,
    max_distance: usize,
) -> Vec<&'static str> {
    let needle = token.to_lowercase();
    let mut ranked: Vec<(usize, &'static str)> = vocabulary
        .iter()
        .map(|candidate| (strsim::levenshtein(&needle, &candidate.to_lowercase()), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();

    // stable: equal distances keep vocabulary order
    ranked.sort_by_key(|(distance, _)| *distance);
    ranked.truncate(max_results);

    log::trace!("Suggestions for '{}': {:?}", token, ranked);
    ranked.into_iter().map(|(_, candidate)| candidate).collect()
}
