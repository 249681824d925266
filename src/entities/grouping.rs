// Grouped display view over extracted entities.
//
// Extraction keeps every mention in source order; the display view wants
// one row per distinct text per label. Groups dedupe by exact text match
// and sort lexically, and the BTreeMap keys give a stable label order.

use std::collections::BTreeMap;

use super::Entity;

/// Group entities by label, deduplicating each group by exact text and
/// sorting it lexically.
pub fn group_by_label(entities: &[Entity]) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for entity in entities {
        grouped
            .entry(entity.label.clone())
            .or_default()
            .push(entity.text.clone());
    }

    for texts in grouped.values_mut() {
        texts.sort();
        texts.dedup();
    }

    grouped
}
