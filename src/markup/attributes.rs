//! Ordered attribute map with merge semantics.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::escape::esc;

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Attribute without a value (`disabled`)
    Bare,
    Text(String),
    /// Produced by adding to an existing attribute
    List(Vec<AttrValue>),
}

impl AttrValue {
    fn into_list(self) -> Vec<AttrValue> {
        match self {
            AttrValue::List(values) => values,
            other => vec![other],
        }
    }

    fn is_bare(&self) -> bool {
        match self {
            AttrValue::Bare => true,
            AttrValue::Text(text) => text.is_empty(),
            AttrValue::List(_) => false,
        }
    }

    fn class_words(&self, out: &mut Vec<String>) {
        match self {
            AttrValue::Bare => {}
            AttrValue::Text(text) => out.push(text.clone()),
            AttrValue::List(values) => values.iter().for_each(|v| v.class_words(out)),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Text(value.clone())
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttrValue::Bare, Into::into)
    }
}

impl<T: Into<AttrValue>> From<Vec<T>> for AttrValue {
    fn from(values: Vec<T>) -> Self {
        AttrValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// Ordered `name -> value` map rendered as HTML attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.position(name).map(|idx| &self.entries[idx].1)
    }

    /// Set an attribute, replacing any previous value in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(idx) => self.entries[idx].1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Add an attribute. An existing value turns into a list holding both.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(idx) => {
                let existing = std::mem::replace(&mut self.entries[idx].1, AttrValue::Bare);
                let mut merged = existing.into_list();
                merged.extend(value.into_list());
                self.entries[idx].1 = AttrValue::List(merged);
            }
            None => self.entries.push((name, value)),
        }
        self
    }

    /// `add` every entry of `other`, in order.
    pub fn merge(&mut self, other: &Attributes) -> &mut Self {
        for (name, value) in &other.entries {
            self.add(name.clone(), value.clone());
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n == name)
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.set(name, value);
        }
        attributes
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (name, value)) in self.entries.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }

            if value.is_bare() {
                f.write_str(name)?;
                continue;
            }

            match value {
                AttrValue::List(_) if name == "class" => {
                    let mut words = Vec::new();
                    value.class_words(&mut words);
                    let mut unique: Vec<String> = Vec::with_capacity(words.len());
                    for word in words {
                        if !unique.contains(&word) {
                            unique.push(word);
                        }
                    }
                    write!(f, "{}=\"{}\"", name, esc(&unique.join(" ")))?;
                }
                AttrValue::List(_) => {
                    let json = serde_json::to_string(value).map_err(|_| fmt::Error)?;
                    write!(f, "{}='{}'", name, esc(&json))?;
                }
                AttrValue::Text(text) => write!(f, "{}=\"{}\"", name, esc(text))?,
                AttrValue::Bare => f.write_str(name)?,
            }
        }
        Ok(())
    }
}
