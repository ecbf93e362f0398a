//! Typed access to the Pathbuilder 2e JSON export.
//!
//! The export is loosely typed: keys go missing, numbers show up as null,
//! and several lists are heterogeneous tuples rather than objects. Rather
//! than deserializing into strict structs (which would reject a whole sheet
//! over one odd field), reads go through [`RawView`], which returns the
//! caller's default on any missing or mismatched key at any depth. Tuple
//! records decode through `Option`-returning helpers so a malformed record
//! is skipped, never fatal.

use serde_json::{Map, Value};

use onepager_domain::INVESTED_MARKER;

/// Key of the optional wrapper object around the character.
pub const BUILD_KEY: &str = "build";

/// A borrowed view into some part of the raw export.
#[derive(Debug, Clone, Copy)]
pub struct RawView<'a> {
    value: &'a Value,
}

impl<'a> RawView<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// Follow `path` through nested objects.
    pub fn get(&self, path: &[&str]) -> Option<&'a Value> {
        path.iter()
            .try_fold(self.value, |current, key| current.as_object()?.get(*key))
            .filter(|value| !value.is_null())
    }

    /// Nested object at `path`, if it is one.
    pub fn at(&self, path: &[&str]) -> Option<RawView<'a>> {
        self.get(path)
            .filter(|value| value.is_object())
            .map(RawView::new)
    }

    /// Integer at `path`; `default` if missing, not an integer, or out of range.
    pub fn int(&self, path: &[&str], default: i32) -> i32 {
        self.get(path).and_then(as_i32).unwrap_or(default)
    }

    /// Wide integer at `path` (currency, quantities).
    pub fn int64(&self, path: &[&str], default: i64) -> i64 {
        self.get(path).and_then(Value::as_i64).unwrap_or(default)
    }

    /// String at `path`; `default` if missing or not a string.
    pub fn text(&self, path: &[&str], default: &str) -> String {
        self.get(path)
            .and_then(Value::as_str)
            .unwrap_or(default)
            .to_string()
    }

    /// String or number at `path` rendered as text (the export writes `age`
    /// either way).
    pub fn display_text(&self, path: &[&str]) -> String {
        match self.get(path) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    pub fn flag(&self, path: &[&str], default: bool) -> bool {
        self.get(path).and_then(Value::as_bool).unwrap_or(default)
    }

    /// Array at `path`; empty if missing or not an array.
    pub fn list(&self, path: &[&str]) -> &'a [Value] {
        self.get(path)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The string elements of the array at `path`; other elements are skipped.
    pub fn texts(&self, path: &[&str]) -> Vec<String> {
        self.list(path)
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    }

    /// Object at `path`, preserving document key order.
    pub fn map(&self, path: &[&str]) -> Option<&'a Map<String, Value>> {
        self.get(path).and_then(Value::as_object)
    }
}

/// The character document inside a Pathbuilder export.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    root: Value,
}

impl RawDocument {
    /// Wrap an already-unwrapped character object.
    pub(crate) fn new(root: Value) -> Self {
        Self { root }
    }

    pub fn view(&self) -> RawView<'_> {
        RawView::new(&self.root)
    }
}

/// Narrow a JSON number to `i32`.
pub fn as_i32(value: &Value) -> Option<i32> {
    value.as_i64().and_then(|n| i32::try_from(n).ok())
}

/// `[name, subChoice, typeLabel, level, ...]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatRecord<'a> {
    pub name: &'a str,
    /// Text or non-zero number; the builder writes numeric choices bare
    pub sub_choice: Option<String>,
    pub label: &'a str,
    /// 0 when the export has a non-integer level
    pub level: i32,
}

impl<'a> FeatRecord<'a> {
    /// Decode a feat tuple; `None` unless it has 4+ elements with a text
    /// name and a text type label.
    pub fn decode(value: &'a Value) -> Option<Self> {
        let fields = value.as_array().filter(|fields| fields.len() >= 4)?;
        Some(Self {
            name: fields[0].as_str()?,
            sub_choice: sub_choice_text(&fields[1]),
            label: fields[2].as_str()?,
            level: as_i32(&fields[3]).unwrap_or(0),
        })
    }
}

fn sub_choice_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// `[name, qty]` or `[name, qty, "Invested"]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentRecord<'a> {
    pub name: &'a str,
    /// 1 when the export has a non-integer quantity
    pub qty: i64,
    pub invested: bool,
}

impl<'a> EquipmentRecord<'a> {
    pub fn decode(value: &'a Value) -> Option<Self> {
        let fields = value.as_array().filter(|fields| fields.len() >= 2)?;
        Some(Self {
            name: fields[0].as_str()?,
            qty: fields[1].as_i64().unwrap_or(1),
            invested: fields.get(2).and_then(Value::as_str) == Some(INVESTED_MARKER),
        })
    }
}

/// `[topic, rank]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoreRecord<'a> {
    pub topic: &'a str,
    pub rank: i32,
}

impl<'a> LoreRecord<'a> {
    pub fn decode(value: &'a Value) -> Option<Self> {
        let fields = value.as_array().filter(|fields| fields.len() >= 2)?;
        Some(Self {
            topic: fields[0].as_str()?,
            rank: as_i32(&fields[1])?,
        })
    }
}

/// Whether a raw feat tuple's first element is exactly `name`.
///
/// Looser than [`FeatRecord::decode`]: only the name slot has to exist.
pub fn names_feat(value: &Value, name: &str) -> bool {
    value
        .as_array()
        .and_then(|fields| fields.first())
        .and_then(Value::as_str)
        == Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_follows_nested_keys() {
        let value = json!({"attributes": {"speed": 30, "speedBonus": null}});
        let view = RawView::new(&value);

        assert_eq!(view.int(&["attributes", "speed"], 25), 30);
        assert_eq!(view.int(&["attributes", "speedBonus"], 0), 0);
        assert_eq!(view.int(&["attributes", "missing", "deeper"], 7), 7);
    }

    #[test]
    fn mismatched_types_fall_back_to_default() {
        let value = json!({"level": "five", "name": 12, "attributes": [1, 2]});
        let view = RawView::new(&value);

        assert_eq!(view.int(&["level"], 1), 1);
        assert_eq!(view.text(&["name"], "Unknown"), "Unknown");
        assert_eq!(view.int(&["attributes", "speed"], 25), 25);
        assert!(view.list(&["name"]).is_empty());
        assert!(view.at(&["attributes"]).is_none());
    }

    #[test]
    fn out_of_range_integers_default() {
        let value = json!({"level": 9_000_000_000_i64});
        assert_eq!(RawView::new(&value).int(&["level"], 1), 1);
        assert_eq!(RawView::new(&value).int64(&["level"], 1), 9_000_000_000);
    }

    #[test]
    fn display_text_renders_numbers() {
        let value = json!({"age": 27, "other": "ancient"});
        let view = RawView::new(&value);
        assert_eq!(view.display_text(&["age"]), "27");
        assert_eq!(view.display_text(&["other"]), "ancient");
        assert_eq!(view.display_text(&["missing"]), "");
    }

    #[test]
    fn texts_skips_non_strings() {
        let value = json!({"languages": ["Common", 3, null, "Draconic"]});
        assert_eq!(
            RawView::new(&value).texts(&["languages"]),
            vec!["Common".to_string(), "Draconic".to_string()]
        );
    }

    #[test]
    fn feat_record_decoding() {
        let value = json!(["Weapon Focus", "Swords", "Class Feat", 3]);
        let record = FeatRecord::decode(&value).unwrap();
        assert_eq!(record.name, "Weapon Focus");
        assert_eq!(record.sub_choice.as_deref(), Some("Swords"));
        assert_eq!(record.label, "Class Feat");
        assert_eq!(record.level, 3);

        let value = json!(["Shield Block", null, "General Feat", "1", "extra"]);
        let record = FeatRecord::decode(&value).unwrap();
        assert_eq!(record.sub_choice, None);
        assert_eq!(record.level, 0);

        let value = json!(["Additional Lore", 2, "Skill Feat", 3]);
        let record = FeatRecord::decode(&value).unwrap();
        assert_eq!(record.sub_choice.as_deref(), Some("2"));

        let value = json!(["Additional Lore", 0, "Skill Feat", 3]);
        assert_eq!(FeatRecord::decode(&value).unwrap().sub_choice, None);

        assert!(FeatRecord::decode(&json!(["Too", "Short", "Class Feat"])).is_none());
        assert!(FeatRecord::decode(&json!([7, "", "Class Feat", 1])).is_none());
        assert!(FeatRecord::decode(&json!({"name": "Toughness"})).is_none());
    }

    #[test]
    fn equipment_record_decoding() {
        let invested = json!(["Rope", 1, "Invested"]);
        let record = EquipmentRecord::decode(&invested).unwrap();
        assert!(record.invested);

        let plain = json!(["Rope", 1]);
        let record = EquipmentRecord::decode(&plain).unwrap();
        assert!(!record.invested);
        assert_eq!(record.qty, 1);

        let odd = json!(["Torch", "lots", "invested"]);
        let record = EquipmentRecord::decode(&odd).unwrap();
        assert_eq!(record.qty, 1);
        assert!(!record.invested);

        assert!(EquipmentRecord::decode(&json!(["Rope"])).is_none());
    }

    #[test]
    fn lore_record_decoding() {
        let sailing = json!(["Sailing", 2]);
        let record = LoreRecord::decode(&sailing).unwrap();
        assert_eq!(record.topic, "Sailing");
        assert_eq!(record.rank, 2);

        assert!(LoreRecord::decode(&json!(["Sailing"])).is_none());
        assert!(LoreRecord::decode(&json!(["Sailing", "trained"])).is_none());
        assert!(LoreRecord::decode(&json!("Sailing")).is_none());
    }

    #[test]
    fn names_feat_only_needs_a_name() {
        assert!(names_feat(&json!(["Toughness"]), "Toughness"));
        assert!(names_feat(&json!(["Toughness", null, "General Feat", 1]), "Toughness"));
        assert!(!names_feat(&json!(["toughness"]), "Toughness"));
        assert!(!names_feat(&json!([]), "Toughness"));
    }
}
