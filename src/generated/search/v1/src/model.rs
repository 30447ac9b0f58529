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

//! The resource models of the Search API.
//!
//! Skills and token filters are polymorphic families. On the wire each value
//! carries a `kind` field selecting the concrete variant; in Rust each family
//! is a sum type with one variant per known `kind`, plus an `Unknown` variant
//! retaining the raw fields of kinds introduced after this library version.

pub(crate) mod iso8601;
mod tagged;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use time::OffsetDateTime;

/// A list of skills applied while indexing documents.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Skillset {
    /// The skillset name, unique within the service.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// A description of the skillset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The skills, applied in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<Skill>,

    /// When set, the service re-runs the skillset on this schedule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<IndexingSchedule>,
}

impl Skillset {
    /// Sets the value of [name][Skillset::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [description][Skillset::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [skills][Skillset::skills].
    pub fn set_skills<I: IntoIterator<Item = Skill>>(mut self, v: I) -> Self {
        self.skills = v.into_iter().collect();
        self
    }

    /// Sets the value of [schedule][Skillset::schedule].
    pub fn set_schedule(mut self, v: IndexingSchedule) -> Self {
        self.schedule = Some(v);
        self
    }
}

/// A schedule for re-running a skillset.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct IndexingSchedule {
    /// The interval between runs, at least five minutes. Sent on the wire as
    /// an ISO-8601 duration, e.g. `"PT2H"`.
    #[serde(default, with = "iso8601")]
    pub interval: std::time::Duration,

    /// When the schedule starts; absent means immediately.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub start_time: Option<OffsetDateTime>,
}

impl IndexingSchedule {
    /// Creates a schedule running every `interval`.
    pub fn new(interval: std::time::Duration) -> Self {
        Self {
            interval,
            start_time: None,
        }
    }

    /// Sets the value of [start_time][IndexingSchedule::start_time].
    pub fn set_start_time(mut self, v: OffsetDateTime) -> Self {
        self.start_time = Some(v);
        self
    }
}

/// A skill in a [Skillset]. Polymorphic on the `kind` field.
///
/// Decoding a payload with an unknown `kind` does not fail: the value lands
/// in [Skill::Unknown] with its raw fields retained, so documents written by
/// newer service versions round-trip through this client.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Skill {
    /// `kind: "ocr"` - extracts text from image files.
    Ocr(OcrSkill),
    /// `kind: "entityRecognition"` - extracts entities of configured
    /// categories from text.
    EntityRecognition(EntityRecognitionSkill),
    /// `kind: "sentiment"` - scores text sentiment.
    Sentiment(SentimentSkill),
    /// A skill kind this library version does not know.
    Unknown(serde_json::Map<String, serde_json::Value>),
}

impl Skill {
    /// The discriminator value of this skill.
    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::Ocr(_) => Some("ocr"),
            Self::EntityRecognition(_) => Some("entityRecognition"),
            Self::Sentiment(_) => Some("sentiment"),
            Self::Unknown(map) => map.get("kind").and_then(serde_json::Value::as_str),
        }
    }
}

impl Serialize for Skill {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Ocr(v) => tagged::serialize(serializer, "ocr", v),
            Self::EntityRecognition(v) => tagged::serialize(serializer, "entityRecognition", v),
            Self::Sentiment(v) => tagged::serialize(serializer, "sentiment", v),
            Self::Unknown(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Skill {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let map = tagged::into_map::<D>(serde_json::Value::deserialize(deserializer)?, "Skill")?;
        let kind = map
            .get("kind")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string);
        match kind.as_deref() {
            Some("ocr") => tagged::into_variant::<D, _>(map).map(Self::Ocr),
            Some("entityRecognition") => {
                tagged::into_variant::<D, _>(map).map(Self::EntityRecognition)
            }
            Some("sentiment") => tagged::into_variant::<D, _>(map).map(Self::Sentiment),
            _ => Ok(Self::Unknown(map)),
        }
    }
}

/// A skill that extracts text from image files.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OcrSkill {
    /// The skill name, unique within the skillset.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// The document path the skill applies to, e.g. `"/document"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    /// The inputs consumed by the skill.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<InputFieldMappingEntry>,

    /// The outputs produced by the skill.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<OutputFieldMappingEntry>,

    /// The language to assume for inputs without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language_code: Option<SkillLanguage>,

    /// Turn orientation detection on. Default is off.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_detect_orientation: Option<bool>,
}

impl OcrSkill {
    /// Sets the value of [name][OcrSkill::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [context][OcrSkill::context].
    pub fn set_context<T: Into<String>>(mut self, v: T) -> Self {
        self.context = Some(v.into());
        self
    }

    /// Sets the value of [inputs][OcrSkill::inputs].
    pub fn set_inputs<I: IntoIterator<Item = InputFieldMappingEntry>>(mut self, v: I) -> Self {
        self.inputs = v.into_iter().collect();
        self
    }

    /// Sets the value of [outputs][OcrSkill::outputs].
    pub fn set_outputs<I: IntoIterator<Item = OutputFieldMappingEntry>>(mut self, v: I) -> Self {
        self.outputs = v.into_iter().collect();
        self
    }

    /// Sets the value of [default_language_code][OcrSkill::default_language_code].
    pub fn set_default_language_code<T: Into<SkillLanguage>>(mut self, v: T) -> Self {
        self.default_language_code = Some(v.into());
        self
    }

    /// Sets the value of [should_detect_orientation][OcrSkill::should_detect_orientation].
    pub fn set_should_detect_orientation(mut self, v: bool) -> Self {
        self.should_detect_orientation = Some(v);
        self
    }
}

/// A skill that extracts entities of configured categories from text.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EntityRecognitionSkill {
    /// The skill name, unique within the skillset.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// The document path the skill applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    /// The inputs consumed by the skill.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<InputFieldMappingEntry>,

    /// The outputs produced by the skill.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<OutputFieldMappingEntry>,

    /// The entity categories to extract; empty extracts all.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,

    /// The language to assume for inputs without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language_code: Option<SkillLanguage>,

    /// Drop entities scored below this precision, in `[0, 1]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_precision: Option<f64>,
}

impl EntityRecognitionSkill {
    /// Sets the value of [name][EntityRecognitionSkill::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [categories][EntityRecognitionSkill::categories].
    pub fn set_categories<I, S>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the value of [minimum_precision][EntityRecognitionSkill::minimum_precision].
    pub fn set_minimum_precision(mut self, v: f64) -> Self {
        self.minimum_precision = Some(v);
        self
    }
}

/// A skill that scores text sentiment.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SentimentSkill {
    /// The skill name, unique within the skillset.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// The document path the skill applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    /// The inputs consumed by the skill.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<InputFieldMappingEntry>,

    /// The outputs produced by the skill.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<OutputFieldMappingEntry>,

    /// The language to assume for inputs without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language_code: Option<SkillLanguage>,
}

impl SentimentSkill {
    /// Sets the value of [name][SentimentSkill::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// Maps a document path to a skill input.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InputFieldMappingEntry {
    /// The input name, as declared by the skill.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// The document path providing the input.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source: String,
}

impl InputFieldMappingEntry {
    /// Creates an entry mapping `source` to the input `name`.
    pub fn new<N: Into<String>, S: Into<String>>(name: N, source: S) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}

/// Maps a skill output to a document path.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OutputFieldMappingEntry {
    /// The output name, as declared by the skill.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// The document path receiving the output.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_name: String,
}

impl OutputFieldMappingEntry {
    /// Creates an entry mapping the output `name` to `target_name`.
    pub fn new<N: Into<String>, T: Into<String>>(name: N, target_name: T) -> Self {
        Self {
            name: name.into(),
            target_name: target_name.into(),
        }
    }
}

/// The language of the documents processed by a skill.
///
/// An open, string-backed enumeration: the named constants cover the
/// languages known to this library version, and [SkillLanguage::new] accepts
/// values introduced by the service later.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SkillLanguage(Cow<'static, str>);

impl SkillLanguage {
    pub const EN: SkillLanguage = SkillLanguage(Cow::Borrowed("en"));
    pub const DE: SkillLanguage = SkillLanguage(Cow::Borrowed("de"));
    pub const ES: SkillLanguage = SkillLanguage(Cow::Borrowed("es"));
    pub const FR: SkillLanguage = SkillLanguage(Cow::Borrowed("fr"));
    pub const JA: SkillLanguage = SkillLanguage(Cow::Borrowed("ja"));

    /// Creates a language from an arbitrary string.
    pub fn new<T: Into<String>>(v: T) -> Self {
        Self(Cow::Owned(v.into()))
    }

    /// The string representation sent on the wire.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SkillLanguage {
    fn from(v: &str) -> Self {
        Self::new(v)
    }
}

impl From<String> for SkillLanguage {
    fn from(v: String) -> Self {
        Self::new(v)
    }
}

impl std::fmt::Display for SkillLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A search index definition.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchIndex {
    /// The index name, unique within the service.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// The token filters available to the index analyzers.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub token_filters: Vec<TokenFilter>,
}

impl SearchIndex {
    /// Sets the value of [name][SearchIndex::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [token_filters][SearchIndex::token_filters].
    pub fn set_token_filters<I: IntoIterator<Item = TokenFilter>>(mut self, v: I) -> Self {
        self.token_filters = v.into_iter().collect();
        self
    }
}

/// A token filter in a [SearchIndex]. Polymorphic on the `kind` field.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum TokenFilter {
    /// `kind: "stopwords"` - removes stop words from token streams.
    Stopwords(StopwordsTokenFilter),
    /// `kind: "keywordMarker"` - marks terms as keywords.
    KeywordMarker(KeywordMarkerTokenFilter),
    /// `kind: "asciiFolding"` - folds non-ASCII characters into their ASCII
    /// equivalents.
    AsciiFolding(AsciiFoldingTokenFilter),
    /// A filter kind this library version does not know.
    Unknown(serde_json::Map<String, serde_json::Value>),
}

impl TokenFilter {
    /// The discriminator value of this filter.
    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::Stopwords(_) => Some("stopwords"),
            Self::KeywordMarker(_) => Some("keywordMarker"),
            Self::AsciiFolding(_) => Some("asciiFolding"),
            Self::Unknown(map) => map.get("kind").and_then(serde_json::Value::as_str),
        }
    }
}

impl Serialize for TokenFilter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Stopwords(v) => tagged::serialize(serializer, "stopwords", v),
            Self::KeywordMarker(v) => tagged::serialize(serializer, "keywordMarker", v),
            Self::AsciiFolding(v) => tagged::serialize(serializer, "asciiFolding", v),
            Self::Unknown(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for TokenFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let map =
            tagged::into_map::<D>(serde_json::Value::deserialize(deserializer)?, "TokenFilter")?;
        let kind = map
            .get("kind")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string);
        match kind.as_deref() {
            Some("stopwords") => tagged::into_variant::<D, _>(map).map(Self::Stopwords),
            Some("keywordMarker") => tagged::into_variant::<D, _>(map).map(Self::KeywordMarker),
            Some("asciiFolding") => tagged::into_variant::<D, _>(map).map(Self::AsciiFolding),
            _ => Ok(Self::Unknown(map)),
        }
    }
}

/// Removes stop words from token streams.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StopwordsTokenFilter {
    /// The filter name, unique within the index.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// The stop words to remove.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stopwords: Vec<String>,

    /// Ignore case when matching. Default is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_case: Option<bool>,
}

impl StopwordsTokenFilter {
    /// Sets the value of [name][StopwordsTokenFilter::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [stopwords][StopwordsTokenFilter::stopwords].
    pub fn set_stopwords<I, S>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the value of [ignore_case][StopwordsTokenFilter::ignore_case].
    pub fn set_ignore_case(mut self, v: bool) -> Self {
        self.ignore_case = Some(v);
        self
    }
}

/// Marks terms as keywords, protecting them from downstream stemming.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct KeywordMarkerTokenFilter {
    /// The filter name, unique within the index.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// The terms to mark.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    /// Ignore case when matching. Default is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_case: Option<bool>,
}

impl KeywordMarkerTokenFilter {
    /// Sets the value of [name][KeywordMarkerTokenFilter::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [keywords][KeywordMarkerTokenFilter::keywords].
    pub fn set_keywords<I, S>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the value of [ignore_case][KeywordMarkerTokenFilter::ignore_case].
    pub fn set_ignore_case(mut self, v: bool) -> Self {
        self.ignore_case = Some(v);
        self
    }
}

/// Folds non-ASCII characters into their ASCII equivalents.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AsciiFoldingTokenFilter {
    /// The filter name, unique within the index.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Keep the original token alongside the folded one. Default is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_original: Option<bool>,
}

impl AsciiFoldingTokenFilter {
    /// Sets the value of [name][AsciiFoldingTokenFilter::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [preserve_original][AsciiFoldingTokenFilter::preserve_original].
    pub fn set_preserve_original(mut self, v: bool) -> Self {
        self.preserve_original = Some(v);
        self
    }
}

/// The response of a `List` skillsets operation.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListSkillsetsResponse {
    /// The skillsets in this page.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skillsets: Vec<Skillset>,

    /// The continuation token for the next page, absent on the last page.
    #[serde(rename = "@nextLink", skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,
}

impl nimbus::paginator::PageableResponse for ListSkillsetsResponse {
    type PageItem = Skillset;

    fn items(self) -> Vec<Skillset> {
        self.skillsets
    }

    fn next_page_token(&self) -> String {
        self.next_link.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    type TestResult = anyhow::Result<()>;

    fn ocr_skill() -> Skill {
        Skill::Ocr(
            OcrSkill::default()
                .set_name("extract-text")
                .set_context("/document")
                .set_inputs([InputFieldMappingEntry::new("image", "/document/content")])
                .set_outputs([OutputFieldMappingEntry::new("text", "extractedText")])
                .set_default_language_code(SkillLanguage::EN)
                .set_should_detect_orientation(true),
        )
    }

    #[test]
    fn skill_encode_writes_the_discriminator() -> TestResult {
        let got = serde_json::to_value(ocr_skill())?;
        let want = serde_json::json!({
            "kind": "ocr",
            "name": "extract-text",
            "context": "/document",
            "inputs": [{"name": "image", "source": "/document/content"}],
            "outputs": [{"name": "text", "targetName": "extractedText"}],
            "defaultLanguageCode": "en",
            "shouldDetectOrientation": true,
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn skill_roundtrip_preserves_the_variant() -> TestResult {
        for skill in [
            ocr_skill(),
            Skill::EntityRecognition(
                EntityRecognitionSkill::default()
                    .set_name("find-orgs")
                    .set_categories(["organization"])
                    .set_minimum_precision(0.7),
            ),
            Skill::Sentiment(SentimentSkill::default().set_name("score")),
        ] {
            let got = serde_json::from_value::<Skill>(serde_json::to_value(&skill)?)?;
            assert_eq!(got, skill);
        }
        Ok(())
    }

    #[test]
    fn skill_decode_dispatches_on_kind() -> TestResult {
        let got = serde_json::from_value::<Skill>(serde_json::json!({
            "kind": "sentiment",
            "name": "score",
        }))?;
        assert_eq!(
            got,
            Skill::Sentiment(SentimentSkill::default().set_name("score"))
        );
        assert_eq!(got.kind(), Some("sentiment"));
        Ok(())
    }

    #[test]
    fn skill_unknown_kind_retains_raw_fields() -> TestResult {
        let payload = serde_json::json!({
            "kind": "translation",
            "name": "translate",
            "targetLanguage": "fr",
        });
        let got = serde_json::from_value::<Skill>(payload.clone())?;
        assert!(matches!(&got, Skill::Unknown(_)), "{got:?}");
        assert_eq!(got.kind(), Some("translation"));
        // And the raw fields survive a round-trip.
        assert_eq!(serde_json::to_value(&got)?, payload);
        Ok(())
    }

    #[test]
    fn skill_missing_kind_falls_back_to_unknown() -> TestResult {
        let got = serde_json::from_value::<Skill>(serde_json::json!({"name": "nameless"}))?;
        assert!(matches!(&got, Skill::Unknown(_)), "{got:?}");
        assert_eq!(got.kind(), None);
        Ok(())
    }

    #[test]
    fn skill_encode_overrides_a_stray_discriminator() -> TestResult {
        // A `kind` sneaking into the variant payload cannot win over the
        // variant's own discriminator.
        let skill = Skill::Sentiment(SentimentSkill::default().set_name("score"));
        let got = serde_json::to_value(&skill)?;
        assert_eq!(got.get("kind"), Some(&serde_json::json!("sentiment")));
        Ok(())
    }

    #[test]
    fn token_filter_roundtrip() -> TestResult {
        for filter in [
            TokenFilter::Stopwords(
                StopwordsTokenFilter::default()
                    .set_name("drop-articles")
                    .set_stopwords(["the", "a"])
                    .set_ignore_case(true),
            ),
            TokenFilter::KeywordMarker(
                KeywordMarkerTokenFilter::default()
                    .set_name("protect-brands")
                    .set_keywords(["nimbus"]),
            ),
            TokenFilter::AsciiFolding(
                AsciiFoldingTokenFilter::default()
                    .set_name("fold")
                    .set_preserve_original(true),
            ),
        ] {
            let got = serde_json::from_value::<TokenFilter>(serde_json::to_value(&filter)?)?;
            assert_eq!(got, filter);
        }
        Ok(())
    }

    #[test]
    fn token_filter_unknown_kind() -> TestResult {
        let payload = serde_json::json!({"kind": "phonetic", "name": "sounds-like"});
        let got = serde_json::from_value::<TokenFilter>(payload.clone())?;
        assert!(matches!(&got, TokenFilter::Unknown(_)), "{got:?}");
        assert_eq!(serde_json::to_value(&got)?, payload);
        Ok(())
    }

    #[test]
    fn open_enum_accepts_unknown_values() -> TestResult {
        let known = serde_json::from_value::<SkillLanguage>(serde_json::json!("en"))?;
        assert_eq!(known, SkillLanguage::EN);

        let unknown = serde_json::from_value::<SkillLanguage>(serde_json::json!("pt-br"))?;
        assert_eq!(unknown.as_str(), "pt-br");
        assert_eq!(serde_json::to_value(&unknown)?, serde_json::json!("pt-br"));
        assert_eq!(SkillLanguage::from("pt-br"), unknown);
        Ok(())
    }

    #[test]
    fn skillset_with_schedule_wire_format() -> TestResult {
        let skillset = Skillset::default()
            .set_name("ocr-pipeline")
            .set_skills([ocr_skill()])
            .set_schedule(IndexingSchedule::new(std::time::Duration::from_secs(
                2 * 60 * 60,
            )));
        let got = serde_json::to_value(&skillset)?;
        assert_eq!(got.get("name"), Some(&serde_json::json!("ocr-pipeline")));
        assert_eq!(
            got.pointer("/schedule/interval"),
            Some(&serde_json::json!("PT2H"))
        );
        let roundtrip = serde_json::from_value::<Skillset>(got)?;
        assert_eq!(roundtrip, skillset);
        Ok(())
    }

    #[test]
    fn list_paging_contract() {
        use nimbus::paginator::PageableResponse;
        let page = ListSkillsetsResponse {
            skillsets: vec![Skillset::default().set_name("s1")],
            next_link: Some("token-1".to_string()),
        };
        assert_eq!(page.next_page_token(), "token-1");
        assert_eq!(page.items().len(), 1);
    }
}
