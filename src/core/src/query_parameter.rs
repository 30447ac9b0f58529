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

use crate::request_parameter::RequestParameter;

/// Adds a query parameter to a builder.
///
/// Some request fields are sent as query parameters and may need special
/// formatting:
/// - Simple scalars are formatted as usual.
/// - [Option] fields that do not contain a value are omitted entirely. This
///   distinguishes "not specified" from "specified as empty".
/// - Repeated fields are joined with `,` before encoding, matching the
///   services' list syntax.
///
/// This function is called from the generated code. It is not intended for
/// general use.
pub fn add<T>(builder: reqwest::RequestBuilder, name: &str, parameter: &T) -> reqwest::RequestBuilder
where
    T: QueryParameter,
{
    QueryParameter::add(parameter, builder, name)
}

/// [QueryParameter] is a trait representing types that can be used as a query
/// parameter.
pub trait QueryParameter {
    fn add(&self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder;
}

impl<T: QueryParameter> QueryParameter for Option<T> {
    fn add(&self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        match &self {
            None => builder,
            Some(t) => t.add(builder, name),
        }
    }
}

impl<T: RequestParameter> QueryParameter for Vec<T> {
    fn add(&self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        let value = self
            .iter()
            .map(RequestParameter::format)
            .collect::<Vec<_>>()
            .join(",");
        builder.query(&[(name, value)])
    }
}

impl<T: RequestParameter> QueryParameter for T {
    fn add(&self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        builder.query(&[(name, self.format())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    type Result = anyhow::Result<()>;

    fn test_builder() -> reqwest::RequestBuilder {
        reqwest::Client::new().get("https://test.nimbus.dev/v1/unused")
    }

    #[test]
    fn none_is_omitted() -> Result {
        let builder = test_builder();
        let builder = add(builder, "a", &None::<i32>);
        let builder = add(builder, "b", &None::<String>);
        let builder = add(builder, "c", &None::<Vec<String>>);
        let r = builder.build()?;
        assert_eq!(None, r.url().query());
        Ok(())
    }

    #[test]
    fn scalars() -> Result {
        let builder = test_builder();
        let builder = add(builder, "i32", &Some(42_i32));
        let builder = add(builder, "u64", &Some(42_u64));
        let builder = add(builder, "bool", &Some(true));
        let builder = add(builder, "s", &Some("x y".to_string()));
        let r = builder.build()?;
        assert_eq!(
            Some(["i32=42", "u64=42", "bool=true", "s=x+y"].join("&").as_str()),
            r.url().query()
        );
        Ok(())
    }

    #[test]
    fn list_joined_with_comma() -> Result {
        let builder = test_builder();
        let builder = add(builder, "a", &None::<String>);
        let builder = add(builder, "b", &vec!["x".to_string(), "y".to_string()]);
        let r = builder.build()?;
        // %2C is the URL encoding for `,`; no `a` parameter at all.
        assert_eq!(Some("b=x%2Cy"), r.url().query());
        Ok(())
    }

    #[test]
    fn declaration_order_is_preserved() -> Result {
        let builder = test_builder();
        let builder = add(builder, "z", &Some(1_i32));
        let builder = add(builder, "a", &Some(2_i32));
        let r = builder.build()?;
        assert_eq!(Some("z=1&a=2"), r.url().query());
        Ok(())
    }
}
