//! The closed set of build target triples.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Unexpected, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::error::{Result, TargetError};

/// A build target, named after the corresponding Rust target triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Target {
    /// `x86_64-pc-windows-msvc`
    X86_64PcWindowsMsvc,
    /// `aarch64-pc-windows-msvc`
    Aarch64PcWindowsMsvc,
    /// `x86_64-unknown-linux-gnu`
    X86_64UnknownLinuxGnu,
    /// `aarch64-unknown-linux-gnu`
    Aarch64UnknownLinuxGnu,
    /// `x86_64-apple-darwin`
    X86_64AppleDarwin,
    /// `aarch64-apple-darwin`
    Aarch64AppleDarwin,
}

impl Target {
    /// Every supported target, in declaration order.
    pub const ALL: [Target; 6] = [
        Target::X86_64PcWindowsMsvc,
        Target::Aarch64PcWindowsMsvc,
        Target::X86_64UnknownLinuxGnu,
        Target::Aarch64UnknownLinuxGnu,
        Target::X86_64AppleDarwin,
        Target::Aarch64AppleDarwin,
    ];

    /// Parse a target from its canonical triple.
    ///
    /// The match is exact: no case folding, trimming, or aliases.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "x86_64-pc-windows-msvc" => Ok(Self::X86_64PcWindowsMsvc),
            "aarch64-pc-windows-msvc" => Ok(Self::Aarch64PcWindowsMsvc),
            "x86_64-unknown-linux-gnu" => Ok(Self::X86_64UnknownLinuxGnu),
            "aarch64-unknown-linux-gnu" => Ok(Self::Aarch64UnknownLinuxGnu),
            "x86_64-apple-darwin" => Ok(Self::X86_64AppleDarwin),
            "aarch64-apple-darwin" => Ok(Self::Aarch64AppleDarwin),
            _ => {
                tracing::debug!(name, "rejected target name");
                Err(TargetError::Unknown(name.to_string()))
            }
        }
    }

    /// Parse a target from raw text bytes, as read from a file or environment.
    ///
    /// Bytes that are not UTF-8 can never name a target; the error carries a
    /// lossy rendering of the input.
    pub fn from_text(text: &[u8]) -> Result<Self> {
        match std::str::from_utf8(text) {
            Ok(name) => Self::parse(name),
            Err(_) => Err(TargetError::Unknown(
                String::from_utf8_lossy(text).into_owned(),
            )),
        }
    }

    /// Every supported target, in declaration order.
    pub fn all() -> Vec<Target> {
        Self::ALL.to_vec()
    }

    /// The targets built when the caller does not ask for specific ones.
    ///
    /// Windows on ARM64 is supported but not built by default.
    pub fn defaults() -> Vec<Target> {
        vec![
            Self::X86_64PcWindowsMsvc,
            Self::X86_64UnknownLinuxGnu,
            Self::Aarch64UnknownLinuxGnu,
            Self::X86_64AppleDarwin,
            Self::Aarch64AppleDarwin,
        ]
    }

    /// The canonical triple for this target.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X86_64PcWindowsMsvc => "x86_64-pc-windows-msvc",
            Self::Aarch64PcWindowsMsvc => "aarch64-pc-windows-msvc",
            Self::X86_64UnknownLinuxGnu => "x86_64-unknown-linux-gnu",
            Self::Aarch64UnknownLinuxGnu => "aarch64-unknown-linux-gnu",
            Self::X86_64AppleDarwin => "x86_64-apple-darwin",
            Self::Aarch64AppleDarwin => "aarch64-apple-darwin",
        }
    }

    /// Convert targets to their canonical triples, preserving order.
    pub fn to_string_array(targets: &[Target]) -> Vec<String> {
        targets.iter().map(|t| t.as_str().to_string()).collect()
    }

    /// Parse a list of triples, failing on the first unknown one.
    ///
    /// No partial list is returned on failure.
    pub fn from_string_array<S: AsRef<str>>(names: &[S]) -> Result<Vec<Target>> {
        names.iter().map(|name| Self::parse(name.as_ref())).collect()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Target {
    type Error = TargetError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl Serialize for Target {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Target {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        // Non-string values are reported by the visitor, not by the format.
        deserializer.deserialize_any(TargetVisitor)
    }
}

struct TargetVisitor;

impl TargetVisitor {
    fn not_a_string<E: de::Error>(unexpected: Unexpected<'_>) -> E {
        E::custom(TargetError::NotAString(format!("invalid type: {unexpected}")))
    }
}

impl<'de> Visitor<'de> for TargetVisitor {
    type Value = Target;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a target triple string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Target, E> {
        Target::parse(v).map_err(E::custom)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Target, E> {
        Err(Self::not_a_string(Unexpected::Bool(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Target, E> {
        Err(Self::not_a_string(Unexpected::Signed(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Target, E> {
        Err(Self::not_a_string(Unexpected::Unsigned(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Target, E> {
        Err(Self::not_a_string(Unexpected::Float(v)))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Target, E> {
        Err(Self::not_a_string(Unexpected::Unit))
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Target, E> {
        Err(Self::not_a_string(Unexpected::Option))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _seq: A) -> std::result::Result<Target, A::Error> {
        Err(Self::not_a_string(Unexpected::Seq))
    }

    fn visit_map<A: MapAccess<'de>>(self, _map: A) -> std::result::Result<Target, A::Error> {
        Err(Self::not_a_string(Unexpected::Map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TRIPLES: [&str; 6] = [
        "x86_64-pc-windows-msvc",
        "aarch64-pc-windows-msvc",
        "x86_64-unknown-linux-gnu",
        "aarch64-unknown-linux-gnu",
        "x86_64-apple-darwin",
        "aarch64-apple-darwin",
    ];

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct BuildRequest {
        target: Target,
    }

    #[test]
    fn parse_every_triple() {
        for name in ALL_TRIPLES {
            let target = Target::parse(name).unwrap();
            assert_eq!(target.as_str(), name);
        }
    }

    #[test]
    fn tables_agree_for_every_variant() {
        for target in Target::all() {
            assert_eq!(Target::parse(target.as_str()).unwrap(), target);
        }
    }

    #[test]
    fn parse_rejects_near_misses() {
        for name in [
            "",
            "X86_64-pc-windows-msvc",
            " x86_64-apple-darwin",
            "x86_64-apple-darwin\n",
            "x86_64-linux-gnu",
            "bogus",
        ] {
            let err = Target::parse(name).unwrap_err();
            assert_eq!(err, TargetError::Unknown(name.to_string()));
        }
    }

    #[test]
    fn all_in_declaration_order() {
        assert_eq!(Target::to_string_array(&Target::all()), ALL_TRIPLES);
    }

    #[test]
    fn defaults_exclude_windows_arm() {
        let defaults = Target::defaults();
        assert_eq!(defaults.len(), 5);
        assert!(!defaults.contains(&Target::Aarch64PcWindowsMsvc));
        assert_eq!(
            defaults,
            vec![
                Target::X86_64PcWindowsMsvc,
                Target::X86_64UnknownLinuxGnu,
                Target::Aarch64UnknownLinuxGnu,
                Target::X86_64AppleDarwin,
                Target::Aarch64AppleDarwin,
            ]
        );
    }

    #[test]
    fn from_string_array_preserves_order() {
        let targets =
            Target::from_string_array(&["aarch64-apple-darwin", "x86_64-pc-windows-msvc"]).unwrap();
        assert_eq!(
            targets,
            vec![Target::Aarch64AppleDarwin, Target::X86_64PcWindowsMsvc]
        );
    }

    #[test]
    fn from_string_array_stops_on_unknown() {
        let err = Target::from_string_array(&["x86_64-apple-darwin", "bogus"]).unwrap_err();
        assert_eq!(err, TargetError::Unknown("bogus".into()));
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn from_string_array_empty() {
        let names: [&str; 0] = [];
        assert!(Target::from_string_array(&names).unwrap().is_empty());
    }

    #[test]
    fn from_text_bytes() {
        assert_eq!(
            Target::from_text(b"aarch64-unknown-linux-gnu").unwrap(),
            Target::Aarch64UnknownLinuxGnu
        );
        assert!(matches!(
            Target::from_text(&[0xff, 0xfe]),
            Err(TargetError::Unknown(_))
        ));
    }

    #[test]
    fn display_and_from_str_agree() {
        let target: Target = "x86_64-unknown-linux-gnu".parse().unwrap();
        assert_eq!(target.to_string(), "x86_64-unknown-linux-gnu");
        assert_eq!(Target::try_from("aarch64-apple-darwin").unwrap(), Target::Aarch64AppleDarwin);
    }

    #[test]
    fn json_field_round_trip() {
        let request = BuildRequest {
            target: Target::Aarch64PcWindowsMsvc,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"target":"aarch64-pc-windows-msvc"}"#);
        let back: BuildRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn json_unknown_target() {
        let err = serde_json::from_str::<BuildRequest>(r#"{"target":"bogus"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("unknown or unsupported target: bogus"), "{msg}");
    }

    #[test]
    fn json_numeric_target_is_not_a_string() {
        let err = serde_json::from_str::<BuildRequest>(r#"{"target":42}"#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("target must be a string"), "{msg}");
        assert!(!msg.contains("unknown or unsupported target"), "{msg}");
    }

    #[test]
    fn json_non_string_values() {
        for doc in [
            r#"{"target":true}"#,
            r#"{"target":null}"#,
            r#"{"target":-1.5}"#,
            r#"{"target":["x86_64-apple-darwin"]}"#,
            r#"{"target":{}}"#,
        ] {
            let err = serde_json::from_str::<BuildRequest>(doc).unwrap_err();
            assert!(err.to_string().contains("target must be a string"), "{doc}: {err}");
        }
    }

    #[test]
    fn json_malformed_string_keeps_syntax_error() {
        let err = serde_json::from_str::<Target>(r#""x86_64-apple"#).unwrap_err();
        let msg = err.to_string();
        assert!(!msg.contains("must be a string"), "{msg}");
        assert!(msg.contains("EOF"), "{msg}");

        let err = serde_json::from_str::<Target>(r#""x86_64-apple-darwin\q""#).unwrap_err();
        let msg = err.to_string();
        assert!(!msg.contains("must be a string"), "{msg}");
        assert!(msg.contains("escape"), "{msg}");
    }

    #[test]
    fn toml_field() {
        let request: BuildRequest = toml::from_str(r#"target = "x86_64-apple-darwin""#).unwrap();
        assert_eq!(request.target, Target::X86_64AppleDarwin);
        let err = toml::from_str::<BuildRequest>("target = 1").unwrap_err();
        assert!(err.to_string().contains("target must be a string"), "{err}");
    }
}
