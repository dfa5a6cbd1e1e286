//! Classification levels and their canonical names.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Unexpected, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::error::{ClassificationError, Result};

/// Information classification of a build artifact.
///
/// Ordered from most to least restricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    /// `nrf-internal-confidential`
    NrfInternalConfidential,
    /// `nrf-internal`
    NrfInternal,
    /// `nrf-external-confidential`
    NrfExternalConfidential,
    /// `nrf-external`
    NrfExternal,
}

impl Classification {
    /// Every classification, in declaration order.
    pub const ALL: [Classification; 4] = [
        Classification::NrfInternalConfidential,
        Classification::NrfInternal,
        Classification::NrfExternalConfidential,
        Classification::NrfExternal,
    ];

    /// Parse a classification from its canonical name.
    pub fn parse(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == name)
            .ok_or_else(|| {
                tracing::debug!(name, "rejected classification name");
                ClassificationError::Unrecognized(name.to_string())
            })
    }

    /// Every classification, in declaration order.
    pub fn all() -> Vec<Classification> {
        Self::ALL.to_vec()
    }

    /// The classifications built when the caller does not ask for specific ones.
    pub fn defaults() -> Vec<Classification> {
        vec![Self::NrfInternal, Self::NrfExternal]
    }

    /// The canonical name of this classification.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NrfInternalConfidential => "nrf-internal-confidential",
            Self::NrfInternal => "nrf-internal",
            Self::NrfExternalConfidential => "nrf-external-confidential",
            Self::NrfExternal => "nrf-external",
        }
    }

    /// Convert classifications to their canonical names, preserving order.
    pub fn to_string_array(classifications: &[Classification]) -> Vec<String> {
        classifications
            .iter()
            .map(|c| c.as_str().to_string())
            .collect()
    }

    /// Parse a list of names that are already known to be valid.
    ///
    /// # Panics
    ///
    /// Panics on the first unrecognized name. Use [`Classification::parse`]
    /// for input that has not been validated.
    pub fn from_string_array<S: AsRef<str>>(names: &[S]) -> Vec<Classification> {
        names
            .iter()
            .map(|name| match Self::parse(name.as_ref()) {
                Ok(classification) => classification,
                Err(err) => {
                    tracing::error!(%err, "aborting on invalid classification list");
                    panic!("{err}");
                }
            })
            .collect()
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Classification {
    type Err = ClassificationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Classification {
    type Error = ClassificationError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Classification {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        // Non-string values are reported by the visitor, not by the format.
        deserializer.deserialize_any(ClassificationVisitor)
    }
}

struct ClassificationVisitor;

impl ClassificationVisitor {
    fn not_a_string<E: de::Error>(unexpected: Unexpected<'_>) -> E {
        E::custom(ClassificationError::NotAString(format!("invalid type: {unexpected}")))
    }
}

impl<'de> Visitor<'de> for ClassificationVisitor {
    type Value = Classification;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a classification name string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Classification, E> {
        Classification::parse(v).map_err(E::custom)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Classification, E> {
        Err(Self::not_a_string(Unexpected::Bool(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Classification, E> {
        Err(Self::not_a_string(Unexpected::Signed(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Classification, E> {
        Err(Self::not_a_string(Unexpected::Unsigned(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Classification, E> {
        Err(Self::not_a_string(Unexpected::Float(v)))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Classification, E> {
        Err(Self::not_a_string(Unexpected::Unit))
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Classification, E> {
        Err(Self::not_a_string(Unexpected::Option))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _seq: A) -> std::result::Result<Classification, A::Error> {
        Err(Self::not_a_string(Unexpected::Seq))
    }

    fn visit_map<A: MapAccess<'de>>(self, _map: A) -> std::result::Result<Classification, A::Error> {
        Err(Self::not_a_string(Unexpected::Map))
    }
}
