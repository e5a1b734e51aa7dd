use serde::Deserialize;

/// A register database document.
///
/// Only `register_mappings` is decoded. Other top-level sections
/// (`enums`, `register_types`) are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RegisterDatabase {
    pub register_mappings: Vec<RegisterMapping>,
}

/// Association between a register address and its symbolic name
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterMapping {
    /// Symbolic name, e.g. `mmVGT_PRIMITIVE_TYPE`
    pub name: String,
    /// Where the register lives
    pub map: RegisterMap,
}

/// Location of a register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RegisterMap {
    /// Byte address of the register.
    ///
    /// Generated lookups switch on a `uint32_t`, so wider values are rejected.
    pub at: u32,
}

impl RegisterDatabase {
    pub fn len(&self) -> usize {
        self.register_mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.register_mappings.is_empty()
    }

    /// Records in input order
    pub fn iter(&self) -> impl Iterator<Item = &RegisterMapping> {
        self.register_mappings.iter()
    }
}

impl RegisterMapping {
    pub fn new(name: impl Into<String>, at: u32) -> Self {
        Self {
            name: name.into(),
            map: RegisterMap { at },
        }
    }

    pub fn address(&self) -> u32 {
        self.map.at
    }
}
