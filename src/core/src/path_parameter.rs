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

use crate::Result;
use crate::error::Error;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// The characters that survive percent-encoding in a path segment.
///
/// Everything else is escaped, matching standard URL escaping rules for a
/// single segment. Raw segments (host templates, fixed path text) bypass this
/// function in the generated code.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes one path segment.
pub fn format(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Validates a required path or header parameter.
///
/// Required parameters must be non-empty. The check runs before any network
/// activity and the resulting error identifies the offending parameter.
///
/// The generated code always writes:
///
/// ```norust
/// path_parameter::required(resource_group_name, "resource_group_name")?
/// ```
pub fn required<'a>(value: &'a str, name: &str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(Error::binding(format!("parameter '{name}' must not be empty")));
    }
    Ok(value)
}
