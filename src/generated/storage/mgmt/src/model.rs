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

//! The resource models of the Storage Management API.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The replication policy between two storage accounts.
///
/// Multiple rules can be defined in one policy. A policy is identified by its
/// `policy_id`; pass `"default"` when the id is not known.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ObjectReplicationPolicy {
    /// A unique id for the policy, assigned by the service on creation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub policy_id: String,

    /// When the policy became enabled on the source account.
    #[serde(skip_serializing_if = "Option::is_none", with = "time::serde::rfc3339::option")]
    pub enabled_time: Option<OffsetDateTime>,

    /// The source storage account name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source_account: String,

    /// The destination storage account name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub destination_account: String,

    /// The replication rules between two containers.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<ObjectReplicationRule>,
}

impl ObjectReplicationPolicy {
    /// Sets the value of [policy_id][ObjectReplicationPolicy::policy_id].
    pub fn set_policy_id<T: Into<String>>(mut self, v: T) -> Self {
        self.policy_id = v.into();
        self
    }

    /// Sets the value of [enabled_time][ObjectReplicationPolicy::enabled_time].
    pub fn set_enabled_time(mut self, v: OffsetDateTime) -> Self {
        self.enabled_time = Some(v);
        self
    }

    /// Sets the value of [source_account][ObjectReplicationPolicy::source_account].
    pub fn set_source_account<T: Into<String>>(mut self, v: T) -> Self {
        self.source_account = v.into();
        self
    }

    /// Sets the value of [destination_account][ObjectReplicationPolicy::destination_account].
    pub fn set_destination_account<T: Into<String>>(mut self, v: T) -> Self {
        self.destination_account = v.into();
        self
    }

    /// Sets the value of [rules][ObjectReplicationPolicy::rules].
    pub fn set_rules<I: IntoIterator<Item = ObjectReplicationRule>>(mut self, v: I) -> Self {
        self.rules = v.into_iter().collect();
        self
    }
}

/// One replication rule between a source and a destination container.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ObjectReplicationRule {
    /// A unique id for the rule, assigned by the service on creation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub rule_id: String,

    /// The source container name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source_container: String,

    /// The destination container name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub destination_container: String,

    /// Optional filters limiting which objects replicate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<ObjectReplicationPolicyFilter>,
}

impl ObjectReplicationRule {
    /// Sets the value of [rule_id][ObjectReplicationRule::rule_id].
    pub fn set_rule_id<T: Into<String>>(mut self, v: T) -> Self {
        self.rule_id = v.into();
        self
    }

    /// Sets the value of [source_container][ObjectReplicationRule::source_container].
    pub fn set_source_container<T: Into<String>>(mut self, v: T) -> Self {
        self.source_container = v.into();
        self
    }

    /// Sets the value of [destination_container][ObjectReplicationRule::destination_container].
    pub fn set_destination_container<T: Into<String>>(mut self, v: T) -> Self {
        self.destination_container = v.into();
        self
    }

    /// Sets the value of [filters][ObjectReplicationRule::filters].
    pub fn set_filters(mut self, v: ObjectReplicationPolicyFilter) -> Self {
        self.filters = Some(v);
        self
    }
}

/// Filters limiting the objects a replication rule applies to.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ObjectReplicationPolicyFilter {
    /// Replicate only objects whose names start with one of these prefixes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prefix_match: Vec<String>,

    /// Replicate only objects created after this time.
    #[serde(skip_serializing_if = "Option::is_none", with = "time::serde::rfc3339::option")]
    pub min_creation_time: Option<OffsetDateTime>,
}

impl ObjectReplicationPolicyFilter {
    /// Sets the value of [prefix_match][ObjectReplicationPolicyFilter::prefix_match].
    pub fn set_prefix_match<I, S>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefix_match = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the value of [min_creation_time][ObjectReplicationPolicyFilter::min_creation_time].
    pub fn set_min_creation_time(mut self, v: OffsetDateTime) -> Self {
        self.min_creation_time = Some(v);
        self
    }
}

/// The response of a `List` operation.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ObjectReplicationPolicyList {
    /// The policies in this page.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<ObjectReplicationPolicy>,

    /// The continuation token for the next page, absent on the last page.
    ///
    /// Sent back to the service as the `$skipToken` query parameter.
    #[serde(rename = "nextLink", skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,
}

impl nimbus::paginator::PageableResponse for ObjectReplicationPolicyList {
    type PageItem = ObjectReplicationPolicy;

    fn items(self) -> Vec<ObjectReplicationPolicy> {
        self.value
    }

    fn next_page_token(&self) -> String {
        self.next_link.clone().unwrap_or_default()
    }
}
