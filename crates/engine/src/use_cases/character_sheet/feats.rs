//! Feats and class features.

use onepager_domain::Feat;

use crate::infrastructure::importers::{FeatRecord, RawView};

/// Feats from `feats[][name, subChoice, typeLabel, level]`.
pub fn normalize_feats(raw: RawView<'_>) -> Vec<Feat> {
    raw.list(&["feats"])
        .iter()
        .enumerate()
        .filter_map(|(index, value)| match FeatRecord::decode(value) {
            Some(record) => Some(Feat::new(
                record.name,
                record.sub_choice.as_deref(),
                record.label,
                record.level,
            )),
            None => {
                tracing::debug!(index, "Skipping malformed feat record");
                None
            }
        })
        .collect()
}

/// Class features and other specials, passed through unchanged.
pub fn read_specials(raw: RawView<'_>) -> Vec<String> {
    raw.texts(&["specials"])
}
