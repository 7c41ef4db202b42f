use crate::case::{from_camel_case, to_camel_case, to_pascal_case};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A field-name style that member names can be mapped to and from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingConvention {
    /// Leave names untouched
    Null,
    /// thisIsATest
    Camel,
    /// ThisIsATest
    Pascal,
    /// this_is_a_test
    Snake,
    /// this-is-a-test
    Kebab,
    /// thisisatest
    Lower,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown naming convention '{0}' (expected one of: null, camel, pascal, snake, kebab, lower)")]
pub struct ParseConventionError(pub String);

impl NamingConvention {
    pub const ALL: [NamingConvention; 6] = [
        NamingConvention::Null,
        NamingConvention::Camel,
        NamingConvention::Pascal,
        NamingConvention::Snake,
        NamingConvention::Kebab,
        NamingConvention::Lower,
    ];

    /// Convert a member name into this convention's field-name style.
    pub fn apply(&self, name: &str) -> String {
        match self {
            NamingConvention::Null => name.to_string(),
            NamingConvention::Camel => to_camel_case(name),
            NamingConvention::Pascal => to_pascal_case(name),
            NamingConvention::Snake => from_camel_case(name, "_"),
            NamingConvention::Kebab => from_camel_case(name, "-"),
            NamingConvention::Lower => from_camel_case(name, ""),
        }
    }

    /// Map a field name styled by this convention back to a Pascal-cased
    /// member name.
    pub fn reverse(&self, name: &str) -> String {
        match self {
            NamingConvention::Null => name.to_string(),
            _ => to_pascal_case(name),
        }
    }

    /// Sample rendering shown by the `conventions` listing.
    pub fn sample(&self) -> String {
        self.apply("this_is_a_test")
    }
}

impl FromStr for NamingConvention {
    type Err = ParseConventionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "null" | "none" => Ok(NamingConvention::Null),
            "camel" | "camelcase" => Ok(NamingConvention::Camel),
            "pascal" | "pascalcase" => Ok(NamingConvention::Pascal),
            "snake" | "underscored" => Ok(NamingConvention::Snake),
            "kebab" | "hyphenated" => Ok(NamingConvention::Kebab),
            "lower" | "lowercase" => Ok(NamingConvention::Lower),
            _ => Err(ParseConventionError(s.to_string())),
        }
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NamingConvention::Null => "null",
            NamingConvention::Camel => "camel",
            NamingConvention::Pascal => "pascal",
            NamingConvention::Snake => "snake",
            NamingConvention::Kebab => "kebab",
            NamingConvention::Lower => "lower",
        };
        write!(f, "{}", name)
    }
}
