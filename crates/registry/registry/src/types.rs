//! Core registry types.

use apache_avro::Schema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier the registry assigns to a schema.
///
/// The full signed 32-bit space is valid; ids carry no structure beyond
/// equality and ordering.
pub type SchemaId = i32;

/// Compatibility rule the registry enforces for a subject.
///
/// Values serialize to the Confluent API strings (`"BACKWARD"`,
/// `"FULL_TRANSITIVE"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompatibilityLevel {
    /// No compatibility checking.
    None,
    /// New schema can read data written with the previous version.
    #[default]
    Backward,
    /// New schema can read data written with all previous versions.
    BackwardTransitive,
    /// Previous version can read data written with the new schema.
    Forward,
    /// All previous versions can read data written with the new schema.
    ForwardTransitive,
    /// Both backward and forward compatible with the previous version.
    Full,
    /// Both backward and forward compatible with all previous versions.
    FullTransitive,
}

impl CompatibilityLevel {
    /// Returns the Confluent API string for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompatibilityLevel::None => "NONE",
            CompatibilityLevel::Backward => "BACKWARD",
            CompatibilityLevel::BackwardTransitive => "BACKWARD_TRANSITIVE",
            CompatibilityLevel::Forward => "FORWARD",
            CompatibilityLevel::ForwardTransitive => "FORWARD_TRANSITIVE",
            CompatibilityLevel::Full => "FULL",
            CompatibilityLevel::FullTransitive => "FULL_TRANSITIVE",
        }
    }

    /// Whether this level checks the candidate against every stored version
    /// rather than only the latest one.
    pub fn is_transitive(&self) -> bool {
        matches!(
            self,
            CompatibilityLevel::BackwardTransitive
                | CompatibilityLevel::ForwardTransitive
                | CompatibilityLevel::FullTransitive
        )
    }
}

impl fmt::Display for CompatibilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompatibilityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NONE" => Ok(CompatibilityLevel::None),
            "BACKWARD" => Ok(CompatibilityLevel::Backward),
            "BACKWARD_TRANSITIVE" => Ok(CompatibilityLevel::BackwardTransitive),
            "FORWARD" => Ok(CompatibilityLevel::Forward),
            "FORWARD_TRANSITIVE" => Ok(CompatibilityLevel::ForwardTransitive),
            "FULL" => Ok(CompatibilityLevel::Full),
            "FULL_TRANSITIVE" => Ok(CompatibilityLevel::FullTransitive),
            other => Err(format!("unknown compatibility level: {}", other)),
        }
    }
}

/// Outcome of verifying one subject schema against the registry.
#[derive(Debug, Clone)]
pub struct SubjectCompatibility {
    /// The schema that was checked.
    pub schema: Schema,
    /// Whether the registry accepted it under the requested level.
    pub compatible: bool,
}

/// Outcome of registering one subject schema with the registry.
#[derive(Debug, Clone)]
pub struct SubjectRegistration {
    /// The schema that was registered.
    pub schema: Schema,
    /// The identifier the registry assigned to it.
    pub id: SchemaId,
}
