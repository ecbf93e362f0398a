//! Identity block: name, class, ancestry, and the other descriptive fields.

use onepager_domain::Identity;

use crate::infrastructure::importers::RawView;

pub fn read_identity(raw: RawView<'_>) -> Identity {
    let defaults = Identity::default();
    Identity {
        name: raw.text(&["name"], &defaults.name),
        level: raw.int(&["level"], defaults.level),
        char_class: raw.text(&["class"], &defaults.char_class),
        ancestry: raw.text(&["ancestry"], &defaults.ancestry),
        heritage: raw.text(&["heritage"], ""),
        background: raw.text(&["background"], ""),
        alignment: raw.text(&["alignment"], ""),
        gender: raw.text(&["gender"], ""),
        age: raw.display_text(&["age"]),
        deity: raw.text(&["deity"], ""),
        size: raw.text(&["sizeName"], &defaults.size),
        languages: raw.texts(&["languages"]),
    }
}
