//! Per-tick diagnostics: named lists of human-readable values.
//!
//! A fresh `Diagnostics` is built every tick and displayed beneath the frame;
//! nothing accumulates across ticks.

use std::fmt;

/// Ordered `{source: [values]}` map. Sections keep insertion order and
/// re-setting a name replaces its values in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    sections: Vec<(&'static str, Vec<String>)>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<I, T>(&mut self, name: &'static str, values: I)
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        let values: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
        match self.sections.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = values,
            None => self.sections.push((name, values)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.sections
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        self.sections.iter().map(|(n, v)| (*n, v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, values)) in self.sections.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}: [{}]", name, values.join(", "))?;
        }
        Ok(())
    }
}
