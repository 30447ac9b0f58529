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

//! ISO-8601 duration codec.
//!
//! The service expresses schedule intervals as ISO-8601 durations, e.g.
//! `"PT2H"` or `"P1DT12H"`. This module maps them to [std::time::Duration]
//! with seconds resolution; fractional components are not supported.

use serde::{Deserialize, Deserializer, Serializer};
use std::time::Duration;

pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(duration))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;
    let value = String::deserialize(deserializer)?;
    parse(&value).map_err(D::Error::custom)
}

pub(crate) fn format(duration: &Duration) -> String {
    let mut secs = duration.as_secs();
    if secs == 0 {
        return "PT0S".to_string();
    }
    let days = secs / 86_400;
    secs %= 86_400;
    let hours = secs / 3_600;
    secs %= 3_600;
    let minutes = secs / 60;
    let seconds = secs % 60;

    use std::fmt::Write as _;
    let mut out = String::from("P");
    if days > 0 {
        write!(out, "{days}D").expect("writing to a string cannot fail");
    }
    if hours > 0 || minutes > 0 || seconds > 0 {
        out.push('T');
        if hours > 0 {
            write!(out, "{hours}H").expect("writing to a string cannot fail");
        }
        if minutes > 0 {
            write!(out, "{minutes}M").expect("writing to a string cannot fail");
        }
        if seconds > 0 {
            write!(out, "{seconds}S").expect("writing to a string cannot fail");
        }
    }
    out
}

pub(crate) fn parse(input: &str) -> Result<Duration, String> {
    let invalid = || format!("'{input}' is not a valid ISO-8601 duration");
    let rest = input.strip_prefix('P').ok_or_else(invalid)?;
    let (date, time) = match rest.split_once('T') {
        Some((date, time)) if !time.is_empty() => (date, time),
        Some(_) => return Err(invalid()),
        None => (rest, ""),
    };
    if date.is_empty() && time.is_empty() {
        return Err(invalid());
    }
    let seconds = scan(date, &[('D', 86_400)], &invalid)?
        .checked_add(scan(time, &[('H', 3_600), ('M', 60), ('S', 1)], &invalid)?)
        .ok_or_else(invalid)?;
    Ok(Duration::from_secs(seconds))
}

/// Scans one ordered run of `<number><unit>` components.
fn scan(
    part: &str,
    units: &[(char, u64)],
    invalid: &dyn Fn() -> String,
) -> Result<u64, String> {
    let mut total: u64 = 0;
    let mut number = String::new();
    let mut next_unit = 0;
    for c in part.chars() {
        if c.is_ascii_digit() {
            number.push(c);
            continue;
        }
        let position = units[next_unit..]
            .iter()
            .position(|(unit, _)| *unit == c)
            .map(|p| p + next_unit)
            .ok_or_else(invalid)?;
        if number.is_empty() {
            return Err(invalid());
        }
        let value: u64 = number.parse().map_err(|_| invalid())?;
        total = value
            .checked_mul(units[position].1)
            .and_then(|v| total.checked_add(v))
            .ok_or_else(invalid)?;
        number.clear();
        next_unit = position + 1;
    }
    if !number.is_empty() {
        // Digits without a trailing unit.
        return Err(invalid());
    }
    Ok(total)
}
