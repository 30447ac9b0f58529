// Copyright 2025 Nimbus Cloud LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Codec helpers for the polymorphic model families.
//!
//! Each family serializes as an object carrying a `kind` discriminator. The
//! discriminator is bound to the variant, never read from the payload on
//! encode; on decode, values with an unrecognized `kind` stay as raw maps.

use serde_json::{Map, Value};

/// Serializes `variant` as an object with the `kind` discriminator set.
pub(crate) fn serialize<S, T>(
    serializer: S,
    kind: &'static str,
    variant: &T,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
    T: serde::Serialize,
{
    use serde::ser::Error as _;
    let value = serde_json::to_value(variant).map_err(S::Error::custom)?;
    let mut map = match value {
        Value::Object(map) => map,
        _ => return Err(S::Error::custom("polymorphic variants serialize as objects")),
    };
    map.insert("kind".to_string(), Value::String(kind.to_string()));
    serde::Serialize::serialize(&map, serializer)
}

/// Requires the decoded value to be an object.
pub(crate) fn into_map<'de, D>(value: Value, family: &'static str) -> Result<Map<String, Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error as _;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(D::Error::custom(format!(
            "expected an object for {family}, got {other}"
        ))),
    }
}

/// Decodes the raw map into a concrete variant.
///
/// The variant types ignore the `kind` field like any other unknown field.
pub(crate) fn into_variant<'de, D, T>(map: Map<String, Value>) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    use serde::de::Error as _;
    serde_json::from_value(Value::Object(map)).map_err(D::Error::custom)
}
