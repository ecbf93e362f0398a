//! Focus spells, flattened from the nested `focus` map.

use onepager_domain::FocusSpell;

use crate::infrastructure::importers::RawView;

/// Top-level focus pool and every focus spell/cantrip, in document order.
///
/// The export nests `focus.<tradition>.<abilityKey>.{focusSpells, focusCantrips}`;
/// spells are emitted before cantrips for each ability entry.
pub fn collect_focus(raw: RawView<'_>) -> (i32, Vec<FocusSpell>) {
    let focus_points = raw.int(&["focusPoints"], 0);
    let Some(traditions) = raw.map(&["focus"]) else {
        return (focus_points, Vec::new());
    };

    let mut spells = Vec::new();
    for (tradition, by_ability) in traditions {
        let Some(by_ability) = by_ability.as_object() else {
            tracing::debug!(tradition = %tradition, "Skipping non-object focus tradition");
            continue;
        };
        for (ability, details) in by_ability {
            if !details.is_object() {
                tracing::debug!(tradition = %tradition, ability = %ability, "Skipping non-object focus entry");
                continue;
            }
            let details = RawView::new(details);
            spells.extend(
                details
                    .texts(&["focusSpells"])
                    .into_iter()
                    .chain(details.texts(&["focusCantrips"]))
                    .map(|name| FocusSpell::new(name, tradition.as_str())),
            );
        }
    }

    (focus_points, spells)
}
