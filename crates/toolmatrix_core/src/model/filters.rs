//! Ordered filter taxonomy table (`category -> allowed values`).
//!
//! # Invariants
//! - Category order is insertion order and survives JSON round-trips.
//! - Values are unique within one category when added through
//!   [`FilterCategories::push_value`].

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Formatter;

/// One filter category with its ordered allowed values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCategory {
    pub name: String,
    pub values: Vec<String>,
}

impl FilterCategory {
    /// Returns whether `value` is one of the allowed values.
    pub fn allows(&self, value: &str) -> bool {
        self.values.iter().any(|current| current == value)
    }
}

/// Insertion-ordered mapping from category name to allowed values.
///
/// Serialized as a plain JSON object. Duplicate keys in input keep the last
/// value but the position of the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCategories {
    categories: Vec<FilterCategory>,
}

impl FilterCategories {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilterCategory> {
        self.categories.iter()
    }

    /// Category names in stored order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|category| category.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&FilterCategory> {
        self.categories.iter().find(|category| category.name == name)
    }

    /// Allowed values of `name`, or an empty slice for unknown categories.
    pub fn values(&self, name: &str) -> &[String] {
        self.get(name)
            .map(|category| category.values.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains_category(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Appends a new category at the end.
    ///
    /// Returns `false` and leaves the table untouched when the category
    /// already exists.
    pub fn insert_category(&mut self, name: impl Into<String>, values: Vec<String>) -> bool {
        let name = name.into();
        if self.contains_category(&name) {
            return false;
        }
        self.categories.push(FilterCategory { name, values });
        true
    }

    /// Appends `value` to `category`, creating the category when missing.
    ///
    /// Returns `false` when the value is already present.
    pub fn push_value(&mut self, category: &str, value: impl Into<String>) -> bool {
        let value = value.into();
        match self.categories.iter_mut().find(|item| item.name == category) {
            Some(existing) if existing.allows(&value) => false,
            Some(existing) => {
                existing.values.push(value);
                true
            }
            None => {
                self.categories.push(FilterCategory {
                    name: category.to_string(),
                    values: vec![value],
                });
                true
            }
        }
    }

    fn upsert(&mut self, name: String, values: Vec<String>) {
        match self.categories.iter_mut().find(|item| item.name == name) {
            Some(existing) => existing.values = values,
            None => self.categories.push(FilterCategory { name, values }),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<String>)> for FilterCategories {
    fn from_iter<I: IntoIterator<Item = (K, Vec<String>)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, values) in iter {
            table.upsert(name.into(), values);
        }
        table
    }
}

impl Serialize for FilterCategories {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.name, &category.values)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FilterCategories {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(FilterCategoriesVisitor)
    }
}

struct FilterCategoriesVisitor;

impl<'de> Visitor<'de> for FilterCategoriesVisitor {
    type Value = FilterCategories;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("an object mapping filter categories to value arrays")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = FilterCategories::new();
        while let Some((name, values)) = access.next_entry::<String, Vec<String>>()? {
            table.upsert(name, values);
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::FilterCategories;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn serialization_keeps_insertion_order() {
        let table: FilterCategories = vec![
            ("Zielgruppe", strings(&["Teams"])),
            ("Lizenz", strings(&["Kostenlos"])),
        ]
        .into_iter()
        .collect();

        let text = serde_json::to_string(&table).unwrap();
        assert_eq!(text, r#"{"Zielgruppe":["Teams"],"Lizenz":["Kostenlos"]}"#);

        let parsed: FilterCategories = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.names().collect::<Vec<_>>(), vec!["Zielgruppe", "Lizenz"]);
    }

    #[test]
    fn push_value_creates_category_and_skips_duplicates() {
        let mut table = FilterCategories::new();
        assert!(table.push_value("Lizenz", "Kostenlos"));
        assert!(!table.push_value("Lizenz", "Kostenlos"));
        assert!(table.push_value("Lizenz", "Freemium"));
        assert_eq!(table.values("Lizenz"), strings(&["Kostenlos", "Freemium"]));
        assert!(table.values("Plattform").is_empty());
    }
}
