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

/// Formats a scalar request parameter for the wire.
///
/// Sealed: the generated code converts richer types (open enums, dates) to
/// strings before handing them to the query builder.
pub(crate) trait RequestParameter {
    fn format(&self) -> String;
}

macro_rules! impl_request_parameter {
    ($($t:ty),*) => {
        $(
            impl RequestParameter for $t {
                fn format(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_request_parameter!(i32, i64, u32, u64, f32, f64, bool, String);

impl<'a> RequestParameter for &'a str {
    fn format(&self) -> String {
        self.to_string()
    }
}
