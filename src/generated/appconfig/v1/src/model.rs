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

//! The resource models of the App Configuration API.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use time::OffsetDateTime;

/// One key-value in a configuration store.
///
/// A key is unique together with its optional label; the same key may exist
/// once per label (e.g. one `greeting` per environment).
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct KeyValue {
    /// The key.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key: String,

    /// The label, absent for unlabeled key-values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// The media type of [value][KeyValue::value].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// The stored value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Free-form tags.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,

    /// Locked key-values reject writes until unlocked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,

    /// When the key-value was last written.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub last_modified: Option<OffsetDateTime>,

    /// An opaque version of this key-value, for conditional requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}

impl KeyValue {
    /// Sets the value of [key][KeyValue::key].
    pub fn set_key<T: Into<String>>(mut self, v: T) -> Self {
        self.key = v.into();
        self
    }

    /// Sets the value of [label][KeyValue::label].
    pub fn set_label<T: Into<String>>(mut self, v: T) -> Self {
        self.label = Some(v.into());
        self
    }

    /// Sets the value of [content_type][KeyValue::content_type].
    pub fn set_content_type<T: Into<String>>(mut self, v: T) -> Self {
        self.content_type = Some(v.into());
        self
    }

    /// Sets the value of [value][KeyValue::value].
    pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }

    /// Sets the value of [tags][KeyValue::tags].
    pub fn set_tags<I, K, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [locked][KeyValue::locked].
    pub fn set_locked(mut self, v: bool) -> Self {
        self.locked = Some(v);
        self
    }

    /// Sets the value of [last_modified][KeyValue::last_modified].
    pub fn set_last_modified(mut self, v: OffsetDateTime) -> Self {
        self.last_modified = Some(v);
        self
    }

    /// Sets the value of [etag][KeyValue::etag].
    pub fn set_etag<T: Into<String>>(mut self, v: T) -> Self {
        self.etag = Some(v.into());
        self
    }
}

/// The fields of a [KeyValue], used in `$select` projections.
///
/// An open, string-backed enumeration: the named constants cover the fields
/// known to this library version, and [SettingFields::new] accepts values
/// introduced by the service later.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SettingFields(Cow<'static, str>);

impl SettingFields {
    pub const KEY: SettingFields = SettingFields(Cow::Borrowed("key"));
    pub const LABEL: SettingFields = SettingFields(Cow::Borrowed("label"));
    pub const CONTENT_TYPE: SettingFields = SettingFields(Cow::Borrowed("content_type"));
    pub const VALUE: SettingFields = SettingFields(Cow::Borrowed("value"));
    pub const TAGS: SettingFields = SettingFields(Cow::Borrowed("tags"));
    pub const LOCKED: SettingFields = SettingFields(Cow::Borrowed("locked"));
    pub const LAST_MODIFIED: SettingFields = SettingFields(Cow::Borrowed("last_modified"));
    pub const ETAG: SettingFields = SettingFields(Cow::Borrowed("etag"));

    /// Creates a field name from an arbitrary string.
    pub fn new<T: Into<String>>(v: T) -> Self {
        Self(Cow::Owned(v.into()))
    }

    /// The string representation sent on the wire.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SettingFields {
    fn from(v: &str) -> Self {
        Self::new(v)
    }
}

impl From<String> for SettingFields {
    fn from(v: String) -> Self {
        Self::new(v)
    }
}

impl std::fmt::Display for SettingFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The response of a `List` operation.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[non_exhaustive]
pub struct ListKeyValuesResponse {
    /// The key-values in this page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<KeyValue>,

    /// The link to the next page, absent on the last page.
    ///
    /// A service-relative path with query, fetched as-is for the next page.
    #[serde(
        default,
        rename = "@nextLink",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_link: Option<String>,
}

impl nimbus::paginator::PageableResponse for ListKeyValuesResponse {
    type PageItem = KeyValue;

    fn items(self) -> Vec<KeyValue> {
        self.items
    }

    fn next_page_token(&self) -> String {
        self.next_link.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;
    type TestResult = anyhow::Result<()>;

    fn full_key_value() -> KeyValue {
        KeyValue::default()
            .set_key("greeting")
            .set_label("prod")
            .set_content_type("text/plain")
            .set_value("hello")
            .set_tags([("team", "web")])
            .set_locked(false)
            .set_last_modified(datetime!(2025-06-01 08:30:00 UTC))
            .set_etag("4f6dd610")
    }

    #[test]
    fn roundtrip_full() -> TestResult {
        let kv = full_key_value();
        let got = serde_json::from_value::<KeyValue>(serde_json::to_value(&kv)?)?;
        assert_eq!(got, kv);
        Ok(())
    }

    #[test]
    fn roundtrip_required_only() -> TestResult {
        let kv = KeyValue::default().set_key("greeting");
        let got = serde_json::from_value::<KeyValue>(serde_json::to_value(&kv)?)?;
        assert_eq!(got, kv);
        assert_eq!(serde_json::to_value(&kv)?, serde_json::json!({"key": "greeting"}));
        Ok(())
    }

    #[test]
    fn wire_format() -> TestResult {
        let got = serde_json::to_value(full_key_value())?;
        let want = serde_json::json!({
            "key": "greeting",
            "label": "prod",
            "contentType": "text/plain",
            "value": "hello",
            "tags": {"team": "web"},
            "locked": false,
            "lastModified": "2025-06-01T08:30:00Z",
            "etag": "4f6dd610",
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn decode_is_lenient() -> TestResult {
        let got = serde_json::from_value::<KeyValue>(serde_json::json!({
            "key": "greeting",
            "label": null,
            "futureField": 42,
        }))?;
        assert_eq!(got, KeyValue::default().set_key("greeting"));
        Ok(())
    }

    #[test]
    fn setting_fields_are_open() -> TestResult {
        assert_eq!(SettingFields::KEY.as_str(), "key");
        let future = SettingFields::from("sync_token");
        assert_eq!(future.as_str(), "sync_token");
        assert_eq!(serde_json::to_value(&future)?, serde_json::json!("sync_token"));
        Ok(())
    }

    #[test]
    fn list_paging_contract() {
        use nimbus::paginator::PageableResponse;
        let page = ListKeyValuesResponse {
            items: vec![KeyValue::default().set_key("k1")],
            next_link: Some("/kv?after=k1&api-version=2025-06-01".to_string()),
        };
        assert_eq!(page.next_page_token(), "/kv?after=k1&api-version=2025-06-01");
        assert_eq!(page.items().len(), 1);

        let page = ListKeyValuesResponse::default();
        assert_eq!(page.next_page_token(), "");
    }
}
