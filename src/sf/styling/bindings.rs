//! Binding tables
//!
//! One `Binding` maps an option key to target style attributes, the value
//! types it accepts, and an optional transform. Tables are `const` data;
//! order matters only for readability, lookup is by key.

use crate::sf::ast::Value;

/// Set of value types a binding accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSet(u8);

impl TypeSet {
    pub const NUMBER: TypeSet = TypeSet(1);
    pub const STRING: TypeSet = TypeSet(1 << 1);
    pub const BOOLEAN: TypeSet = TypeSet(1 << 2);
    pub const NUMBER_OR_STRING: TypeSet = TypeSet(Self::NUMBER.0 | Self::STRING.0);
    pub const EVERYTHING: TypeSet = TypeSet(Self::NUMBER.0 | Self::STRING.0 | Self::BOOLEAN.0);

    pub fn accepts(self, value: &Value) -> bool {
        let needed = match value {
            Value::Num(_) => Self::NUMBER,
            Value::Str(_) => Self::STRING,
            Value::Bool(_) => Self::BOOLEAN,
        };
        self.0 & needed.0 != 0
    }
}

/// Transform applied per target attribute; `None` suppresses the assignment.
pub type Transform = fn(key: &str, value: &Value, target: &str) -> Option<Value>;

/// One option-key binding.
#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub key: &'static str,
    pub targets: &'static [&'static str],
    pub types: TypeSet,
    pub transform: Option<Transform>,
}

const fn plain(key: &'static str, target: &'static [&'static str], types: TypeSet) -> Binding {
    Binding {
        key,
        targets: target,
        types,
        transform: None,
    }
}

/// Base table shared by every tag family.
pub const BASE: &[Binding] = &[
    plain("mtop", &["margin-top"], TypeSet::NUMBER_OR_STRING),
    plain("mbottom", &["margin-bottom"], TypeSet::NUMBER_OR_STRING),
    plain("mleft", &["margin-left"], TypeSet::NUMBER_OR_STRING),
    plain("mright", &["margin-right"], TypeSet::NUMBER_OR_STRING),
    plain("ptop", &["padding-top"], TypeSet::NUMBER_OR_STRING),
    plain("pbottom", &["padding-bottom"], TypeSet::NUMBER_OR_STRING),
    plain("pleft", &["padding-left"], TypeSet::NUMBER_OR_STRING),
    plain("pright", &["padding-right"], TypeSet::NUMBER_OR_STRING),
    plain("border", &["border"], TypeSet::STRING),
    plain("bradius", &["border-radius"], TypeSet::NUMBER_OR_STRING),
    plain("color", &["color"], TypeSet::STRING),
    plain("cursor", &["cursor"], TypeSet::STRING),
    plain("blend", &["mix-blend-mode"], TypeSet::STRING),
    plain("width", &["width"], TypeSet::NUMBER_OR_STRING),
    plain("height", &["height"], TypeSet::NUMBER_OR_STRING),
    plain("mwidth", &["max-width"], TypeSet::NUMBER_OR_STRING),
    plain("mheight", &["max-height"], TypeSet::NUMBER_OR_STRING),
    plain("display", &["display"], TypeSet::STRING),
    plain("position", &["position"], TypeSet::STRING),
    plain("float", &["float"], TypeSet::STRING),
];

/// Extension for image tags.
pub const IMAGE_EXTENSION: &[Binding] = &[plain("alt", &["alt"], TypeSet::STRING)];

/// Extension for link tags (`a`, `link`).
pub const LINK_EXTENSION: &[Binding] = &[
    plain("href", &["href"], TypeSet::STRING),
    Binding {
        key: "underline",
        targets: &["text-decoration"],
        types: TypeSet::BOOLEAN,
        transform: Some(underline_decoration),
    },
    Binding {
        key: "newtab",
        targets: &["target", "rel"],
        types: TypeSet::BOOLEAN,
        transform: Some(new_tab_attributes),
    },
];

/// `underline=true` leaves the default decoration untouched;
/// `underline=false` forces it off.
fn underline_decoration(_key: &str, value: &Value, _target: &str) -> Option<Value> {
    match value {
        Value::Bool(false) => Some(Value::Str("none".to_string())),
        _ => None,
    }
}

/// `newtab=true` fans out to fixed literals per target; `newtab=false`
/// assigns nothing.
fn new_tab_attributes(_key: &str, value: &Value, target: &str) -> Option<Value> {
    match (value, target) {
        (Value::Bool(true), "target") => Some(Value::Str("_blank".to_string())),
        (Value::Bool(true), "rel") => Some(Value::Str("noopener noreferrer".to_string())),
        _ => None,
    }
}
