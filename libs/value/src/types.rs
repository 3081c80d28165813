//! Type tags for tagged values
//!
//! The names match what Sass's `type-of()` returns, with one wrinkle inherited
//! from the preprocessor: booleans are tagged `bool`, not `boolean`.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SassType {
    Number,
    String,
    Color,
    Bool,
    List,
    Map,
    Null,
    Error,
}

impl SassType {
    pub const ALL: [SassType; 8] = [
        SassType::Number,
        SassType::String,
        SassType::Color,
        SassType::Bool,
        SassType::List,
        SassType::Map,
        SassType::Null,
        SassType::Error,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SassType::Number => "number",
            SassType::String => "string",
            SassType::Color => "color",
            SassType::Bool => "bool",
            SassType::List => "list",
            SassType::Map => "map",
            SassType::Null => "null",
            SassType::Error => "error",
        }
    }
}

impl fmt::Display for SassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SassType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SassType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| format!("unknown Sass type '{s}'"))
    }
}
