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

use tracing::{Span, field};

/// Creates the diagnostic span for one operation invocation.
///
/// The span represents the logical operation and tracks its overall duration
/// and outcome, including retries. Scope names follow the
/// `"<ClientName>.<OperationName>"` convention, for example
/// `"ObjectReplicationPolicies.Get"`.
///
/// The generated clients create the span on entry, run the pipeline inside
/// it, and record the outcome with [record_operation_result] on every exit
/// path.
pub fn create_operation_span(client_name: &str, operation_name: &str) -> Span {
    tracing::info_span!(
        "client_request",
        scope = %format!("{client_name}.{operation_name}"),
        client = client_name,
        operation = operation_name,
        // Fields to be recorded on completion.
        status = field::Empty,
        error = field::Empty,
    )
}

/// Records the final status on the operation span.
pub fn record_operation_result<T>(
    result: &Result<crate::response::Response<T>, crate::error::Error>,
    span: &Span,
) {
    match result {
        Ok(_) => {
            span.record("status", "OK");
        }
        Err(err) => {
            span.record("status", "ERROR");
            span.record("error", err.to_string().as_str());
        }
    }
}
