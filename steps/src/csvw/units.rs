//! Unit notations used in CSVW column metadata.

use std::collections::BTreeMap;

use semflow_vocab::namespaces::unit;

/// Built-in notations, lowercase.
const BUILTIN: &[(&str, &str)] = &[
    ("mm", unit::MILLI_M),
    ("millimeter", unit::MILLI_M),
    ("m", unit::M),
    ("meter", unit::M),
    ("cm", unit::CENTI_M),
    ("centimeter", unit::CENTI_M),
    ("kg", unit::KILO_GM),
    ("kilogram", unit::KILO_GM),
    ("g", unit::GM),
    ("gram", unit::GM),
    ("s", unit::SEC),
    ("second", unit::SEC),
    ("°c", unit::DEG_C),
    ("degc", unit::DEG_C),
    ("celsius", unit::DEG_C),
    ("k", unit::K),
    ("kelvin", unit::K),
];

/// Case-insensitive map from unit notation to QUDT unit IRI.
#[derive(Debug, Clone)]
pub struct UnitTable {
    entries: BTreeMap<String, String>,
}

impl UnitTable {
    /// The built-in table.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN
                .iter()
                .map(|(notation, iri)| ((*notation).to_owned(), (*iri).to_owned()))
                .collect(),
        }
    }

    /// The built-in table extended by `overrides`, which win on conflict.
    #[must_use]
    pub fn with_overrides<'a, I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut table = Self::builtin();
        for (notation, iri) in overrides {
            table.entries.insert(notation.to_lowercase(), iri.clone());
        }
        table
    }

    /// The unit IRI for a notation, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn lookup(&self, notation: &str) -> Option<&str> {
        self.entries
            .get(&notation.trim().to_lowercase())
            .map(String::as_str)
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::builtin()
    }
}
