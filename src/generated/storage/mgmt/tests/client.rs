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

use httptest::{Expectation, Server, matchers::*, responders::*};
use nimbus::credentials::Credentials;
use nimbus::options::{ClientConfig, RequestOptions};
use nimbus_storage_mgmt::client::ObjectReplicationPolicies;
use nimbus_storage_mgmt::model::*;

type Result<T> = anyhow::Result<T>;

const POLICY_PATH: &str = "/subscriptions/sub-1/resourceGroups/rg1/providers/Nimbus.Storage/storageAccounts/acct1/objectReplicationPolicies/default";
const LIST_PATH: &str = "/subscriptions/sub-1/resourceGroups/rg1/providers/Nimbus.Storage/storageAccounts/acct1/objectReplicationPolicies";

fn test_config(server: &Server) -> ClientConfig {
    ClientConfig::default()
        .set_credentials(Credentials::test_credentials())
        .set_endpoint(format!("http://{}", server.addr()))
}

async fn test_client(server: &Server) -> Result<ObjectReplicationPolicies> {
    Ok(ObjectReplicationPolicies::new("sub-1", test_config(server)).await?)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn get_success() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method("GET"),
            request::path(POLICY_PATH),
            request::query(url_decoded(contains(("api-version", "2025-06-01")))),
        ])
        .respond_with(json_encoded(
            serde_json::json!({"policyId": "default", "rules": []}),
        )),
    );

    let client = test_client(&server).await?;
    let response = client
        .get("rg1", "acct1", "default", RequestOptions::default())
        .await?;
    let policy = response.into_body();
    assert_eq!(policy.policy_id, "default");
    assert!(policy.rules.is_empty(), "{policy:?}");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn get_not_found() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![request::method("GET"), request::path(POLICY_PATH)])
            .respond_with(
                status_code(404)
                    .append_header("content-type", "application/json")
                    .body(r#"{"error": {"code": "NotFound", "message": "policy 'default' was not found"}}"#),
            ),
    );

    let client = test_client(&server).await?;
    let response = client
        .get("rg1", "acct1", "default", RequestOptions::default())
        .await;
    let err = response.unwrap_err();
    assert_eq!(err.http_status_code(), Some(404), "{err:?}");
    let detail = err.service_error().expect("a parsed error envelope");
    assert_eq!(detail.code, "NotFound");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn validation_fails_before_any_request() -> Result<()> {
    let server = Server::run();
    // No expectations: a request would fail the test on drop.
    let client = test_client(&server).await?;
    let err = client
        .get("", "acct1", "default", RequestOptions::default())
        .await
        .unwrap_err();
    assert!(err.is_binding(), "{err:?}");
    assert!(err.to_string().contains("resource_group_name"), "{err}");

    let err = client
        .get("rg1", "", "default", RequestOptions::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("account_name"), "{err}");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn create_or_update_sends_the_policy() -> Result<()> {
    let server = Server::run();
    let want_body = serde_json::json!({
        "sourceAccount": "acct1",
        "destinationAccount": "acct2",
        "rules": [{"sourceContainer": "photos", "destinationContainer": "photos-copy"}],
    });
    server.expect(
        Expectation::matching(all_of![
            request::method("PUT"),
            request::path(POLICY_PATH),
            request::body(json_decoded(eq(want_body.clone()))),
        ])
        .respond_with(json_encoded(serde_json::json!({
            "policyId": "default",
            "sourceAccount": "acct1",
            "destinationAccount": "acct2",
            "rules": [{
                "ruleId": "rule-1",
                "sourceContainer": "photos",
                "destinationContainer": "photos-copy",
            }],
        }))),
    );

    let properties = ObjectReplicationPolicy::default()
        .set_source_account("acct1")
        .set_destination_account("acct2")
        .set_rules([ObjectReplicationRule::default()
            .set_source_container("photos")
            .set_destination_container("photos-copy")]);

    let client = test_client(&server).await?;
    let response = client
        .create_or_update(
            "rg1",
            "acct1",
            "default",
            properties,
            RequestOptions::default(),
        )
        .await?;
    assert_eq!(response.body().rules[0].rule_id, "rule-1");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn delete_with_no_content() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method("DELETE"),
            request::path(POLICY_PATH)
        ])
        .respond_with(status_code(204)),
    );

    let client = test_client(&server).await?;
    client
        .delete("rg1", "acct1", "default", RequestOptions::default())
        .await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn list_drains_all_pages() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method("GET"),
            request::path(LIST_PATH),
            request::query(url_decoded(not(contains(key("$skipToken"))))),
        ])
        .respond_with(json_encoded(serde_json::json!({
            "value": [{"policyId": "p1"}, {"policyId": "p2"}],
            "nextLink": "page-2",
        }))),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method("GET"),
            request::path(LIST_PATH),
            request::query(url_decoded(contains(("$skipToken", "page-2")))),
        ])
        .respond_with(json_encoded(serde_json::json!({
            "value": [{"policyId": "p3"}],
        }))),
    );

    let client = test_client(&server).await?;
    let mut items = client
        .list("rg1", "acct1", RequestOptions::default())
        .items();
    let mut ids = Vec::new();
    while let Some(policy) = items.next().await {
        ids.push(policy?.policy_id);
    }
    assert_eq!(ids, ["p1", "p2", "p3"]);
    Ok(())
}

#[test]
fn blocking_client_mirrors_the_async_surface() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![request::method("GET"), request::path(POLICY_PATH)])
            .respond_with(json_encoded(
                serde_json::json!({"policyId": "default", "rules": []}),
            )),
    );
    server.expect(
        Expectation::matching(all_of![request::method("GET"), request::path(LIST_PATH)])
            .respond_with(json_encoded(serde_json::json!({
                "value": [{"policyId": "p1"}],
            }))),
    );

    let client =
        nimbus_storage_mgmt::blocking::ObjectReplicationPolicies::new("sub-1", test_config(&server))?;
    let response = client.get("rg1", "acct1", "default", RequestOptions::default())?;
    assert_eq!(response.body().policy_id, "default");

    let ids = client
        .list("rg1", "acct1", RequestOptions::default())
        .items()
        .map(|policy| policy.map(|p| p.policy_id))
        .collect::<nimbus::Result<Vec<_>>>()?;
    assert_eq!(ids, ["p1"]);
    Ok(())
}
