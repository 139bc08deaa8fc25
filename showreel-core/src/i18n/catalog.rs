use serde_json::Value;
use thiserror::Error;

use super::locales::Lang;

const LOCALE_TABLE: &[(Lang, &str)] = &[
    (Lang::En, include_str!("../../i18n/en.json")),
    (Lang::Nl, include_str!("../../i18n/nl.json")),
    (Lang::Ar, include_str!("../../i18n/ar.json")),
];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("translations for '{lang}' are not valid JSON: {source}")]
    Json {
        lang: Lang,
        #[source]
        source: serde_json::Error,
    },
}

/// Translated strings per language, organised by page section.
///
/// Lookups use dotted paths (`services.items.drone.title`); array elements are
/// addressed by their index (`portfolio.items.2.title`).
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<(Lang, Value)>,
}

impl Catalog {
    /// Parse the translations compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if any embedded locale file fails to parse.
    pub fn embedded() -> Result<Self, CatalogError> {
        let mut entries = Vec::with_capacity(LOCALE_TABLE.len());
        for (lang, data) in LOCALE_TABLE {
            let value = serde_json::from_str(data).map_err(|source| CatalogError::Json {
                lang: *lang,
                source,
            })?;
            entries.push((*lang, value));
        }
        Ok(Self { entries })
    }

    /// Build a catalog from already-parsed locale trees.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (Lang, Value)>) -> Self {
        let mut catalog = Self::default();
        for (lang, value) in entries {
            catalog.insert(lang, value);
        }
        catalog
    }

    fn insert(&mut self, lang: Lang, value: Value) {
        match self.entries.iter_mut().find(|(l, _)| *l == lang) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((lang, value)),
        }
    }

    #[must_use]
    pub fn contains(&self, lang: Lang) -> bool {
        self.tree(lang).is_some()
    }

    #[must_use]
    pub fn tree(&self, lang: Lang) -> Option<&Value> {
        self.entries
            .iter()
            .find_map(|(l, value)| (*l == lang).then_some(value))
    }

    /// Resolve `path` to a string for `lang`.
    #[must_use]
    pub fn text(&self, lang: Lang, path: &str) -> Option<&str> {
        self.tree(lang)
            .and_then(|tree| get_nested_value(tree, path))
            .and_then(Value::as_str)
    }

    /// Keys of the object at `path`, in document order.
    #[must_use]
    pub fn keys(&self, lang: Lang, path: &str) -> Vec<&str> {
        self.tree(lang)
            .and_then(|tree| get_nested_value(tree, path))
            .and_then(Value::as_object)
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Length of the array at `path`, zero when absent.
    #[must_use]
    pub fn list_len(&self, lang: Lang, path: &str) -> usize {
        self.tree(lang)
            .and_then(|tree| get_nested_value(tree, path))
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}

fn get_nested_value<'a>(obj: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = obj;
    for key in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(key)?,
            Value::Array(items) => items.get(key.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}
