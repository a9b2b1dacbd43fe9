//! Coded values referencing external terminologies.
//!
//! A [`Coding<S>`] pairs a `code` with the code system `S` fixes for it, plus
//! an optional human-readable `display` and catalog `version`. The system tag
//! is a zero-sized marker type (e.g. [`Icd10Gm`]) rather than a runtime field,
//! so a `Coding<Icd10Gm>` and a `Coding<Atc>` are distinct types at compile
//! time even though both serialize to the same JSON shape.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Fixes the `system` string serialized for a [`Coding`] marker type.
pub trait CodeSystem {
    /// The code system URI/identifier serialized in the `system` field.
    const SYSTEM: &'static str;
}

macro_rules! code_system_marker {
    ($name:ident, $system:literal) => {
        #[doc = concat!("Marker tag for the `", $system, "` code system.")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name;

        impl CodeSystem for $name {
            const SYSTEM: &'static str = $system;
        }
    };
}

code_system_marker!(Icd10Gm, "icd10gm");
code_system_marker!(IcdO3T, "icdo3t");
code_system_marker!(IcdO3M, "icdo3m");
code_system_marker!(Atc, "atc");
code_system_marker!(Hgnc, "hgnc");

/// A coded value: `{ code, system, display?, version? }`.
///
/// `system` is not stored; it is derived from `S` at (de)serialization time.
pub struct Coding<S> {
    pub code: String,
    pub display: Option<String>,
    pub version: Option<String>,
    marker: PhantomData<S>,
}

impl<S: CodeSystem> Coding<S> {
    /// Builds a coding with no display text or version.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display: None,
            version: None,
            marker: PhantomData,
        }
    }

    /// Builds a coding carrying a catalog version.
    pub fn versioned(code: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display: None,
            version: Some(version.into()),
            marker: PhantomData,
        }
    }

    /// The fixed code system string for this coding's marker type.
    pub fn system(&self) -> &'static str {
        S::SYSTEM
    }
}

// Manual impls: PhantomData<S> is Clone/Copy/Debug/PartialEq regardless of
// S, but #[derive] would add a spurious `S: Clone` bound.
impl<S> Clone for Coding<S> {
    fn clone(&self) -> Self {
        Self {
            code: self.code.clone(),
            display: self.display.clone(),
            version: self.version.clone(),
            marker: PhantomData,
        }
    }
}

impl<S> fmt::Debug for Coding<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coding")
            .field("code", &self.code)
            .field("display", &self.display)
            .field("version", &self.version)
            .finish()
    }
}

impl<S> PartialEq for Coding<S> {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.display == other.display && self.version == other.version
    }
}

impl<S: CodeSystem> Serialize for Coding<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut state = serializer.serialize_struct("Coding", 4)?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("system", S::SYSTEM)?;
        state.serialize_field("display", &self.display)?;
        state.serialize_field("version", &self.version)?;
        state.end()
    }
}

impl<'de, S: CodeSystem> Deserialize<'de> for Coding<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CodingVisitor<S>(PhantomData<S>);

        impl<'de, S: CodeSystem> Visitor<'de> for CodingVisitor<S> {
            type Value = Coding<S>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a Coding struct with code/system/display?/version?")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut code: Option<String> = None;
                let mut display: Option<String> = None;
                let mut version: Option<String> = None;
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "code" => code = Some(map.next_value()?),
                        "system" => {
                            // The system is implied by S; we still consume it
                            // (and tolerate a mismatch rather than failing
                            // parse of an otherwise valid document).
                            let _: String = map.next_value()?;
                        }
                        "display" => display = map.next_value()?,
                        "version" => version = map.next_value()?,
                        _ => {
                            let _: de::IgnoredAny = map.next_value()?;
                        }
                    }
                }
                let code = code.ok_or_else(|| de::Error::missing_field("code"))?;
                Ok(Coding {
                    code,
                    display,
                    version,
                    marker: PhantomData,
                })
            }
        }

        deserializer.deserialize_struct(
            "Coding",
            &["code", "system", "display", "version"],
            CodingVisitor(PhantomData),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_fixed_system() {
        let coding: Coding<Icd10Gm> = Coding::versioned("C34.9", "2024");
        let json = serde_json::to_value(&coding).unwrap();
        assert_eq!(json["system"], "icd10gm");
        assert_eq!(json["code"], "C34.9");
        assert_eq!(json["version"], "2024");
    }

    #[test]
    fn round_trips_through_json() {
        let coding: Coding<Atc> = Coding::new("L01XE01");
        let json = serde_json::to_string(&coding).unwrap();
        let back: Coding<Atc> = serde_json::from_str(&json).unwrap();
        assert_eq!(coding, back);
    }
}
