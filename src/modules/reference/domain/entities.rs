use serde::{Deserialize, Serialize};

/// Film genre reference record. Sourced from a fixed catalog, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// MPA content-rating reference record (G, PG, PG-13, R, NC-17).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Mpa {
    pub id: i32,
    pub name: String,
}

impl std::fmt::Display for Mpa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
