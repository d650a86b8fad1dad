//! Style binder
//!
//! Composes the binding tables for a tag family and binds parsed options
//! into a style attribute map. Unknown keys and type-mismatched values are
//! ignored; a transform decides per target whether anything is assigned.

use super::bindings::{Binding, BASE, IMAGE_EXTENSION, LINK_EXTENSION};
use crate::sf::ast::ValueMap;

/// A composed binder for one tag family.
#[derive(Debug, Clone)]
pub struct StyleBinder {
    bindings: Vec<&'static Binding>,
}

impl StyleBinder {
    /// Binder for a tag: every tag gets the base table; image tags add
    /// `alt`, link tags add `href`/`newtab`/`underline`.
    pub fn for_tag(tag: &str) -> StyleBinder {
        match tag {
            "img" => StyleBinder::from_tables(&[BASE, IMAGE_EXTENSION]),
            "a" | "link" => StyleBinder::from_tables(&[BASE, LINK_EXTENSION]),
            _ => StyleBinder::from_tables(&[BASE]),
        }
    }

    /// Compose tables into one binder.
    ///
    /// Panics when a binding has no target attributes; that is a programming
    /// error in the table, not a document error.
    pub fn from_tables(tables: &[&'static [Binding]]) -> StyleBinder {
        let bindings: Vec<&'static Binding> = tables.iter().flat_map(|t| t.iter()).collect();
        for binding in &bindings {
            assert!(
                !binding.targets.is_empty(),
                "binding for option key '{}' has no target attributes",
                binding.key
            );
        }
        StyleBinder { bindings }
    }

    /// Bind parsed options into a style attribute map.
    pub fn bind(&self, options: &ValueMap) -> ValueMap {
        let mut style = ValueMap::new();
        for (key, value) in options.iter() {
            let Some(binding) = self.bindings.iter().find(|b| b.key == key) else {
                continue;
            };
            if !binding.types.accepts(value) {
                continue;
            }
            for target in binding.targets {
                match binding.transform {
                    Some(transform) => {
                        if let Some(out) = transform(key, value, target) {
                            style.insert(target, out);
                        }
                    }
                    None => style.insert(target, value.clone()),
                }
            }
        }
        style
    }
}
