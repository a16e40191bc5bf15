//! Lookup over the infinite-mixtape catalog.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::MixtapeEntry;

/// First entry whose alias or title equals `name`, ignoring case and
/// surrounding whitespace.
pub fn resolve<'a>(catalog: &'a [MixtapeEntry], name: &str) -> Option<&'a MixtapeEntry> {
    let wanted = name.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    catalog
        .iter()
        .find(|m| m.alias.to_lowercase() == wanted || m.title.to_lowercase() == wanted)
}

/// Entries whose title, subtitle, alias or description contains `query`
/// (case-insensitive), in catalog order.
pub fn search<'a>(catalog: &'a [MixtapeEntry], query: &str) -> Vec<&'a MixtapeEntry> {
    let needle = query.trim().to_lowercase();
    catalog
        .iter()
        .filter(|m| {
            [&m.title, &m.subtitle, &m.alias, &m.description]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Uniform pick over the whole catalog.
pub fn random_pick<'a, R: Rng + ?Sized>(
    catalog: &'a [MixtapeEntry],
    rng: &mut R,
) -> Option<&'a MixtapeEntry> {
    catalog.choose(rng)
}
