// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref FULL_NAME: Regex = Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_-]*$").unwrap();
    static ref SHORT_NAME: Regex = Regex::new(r"^[A-Za-z]$").unwrap();
    static ref SHORT_NAME_RUN: Regex = Regex::new(r"^[A-Za-z]*$").unwrap();
}

/// Returns true if the given string is acceptable as a flag's full name. Full
/// names start with a letter, digit, or underscore, and may additionally
/// contain hyphens after that.
pub fn is_valid_full_name(name: &str) -> bool {
    FULL_NAME.is_match(name)
}

/// Returns true if the given character is acceptable as a flag's short name.
/// Only single ASCII letters are allowed.
pub fn is_valid_short_name(short_name: char) -> bool {
    let mut buf = [0; 4];
    SHORT_NAME.is_match(short_name.encode_utf8(&mut buf))
}

/// Returns true if the given token names a flag unambiguously: either
/// "--<full name>" or "-<single letter>".
pub fn is_valid_name_for_lookup(token: &str) -> bool {
    match split_dashes(token) {
        Some((2, name)) => FULL_NAME.is_match(name),
        Some((1, name)) => SHORT_NAME.is_match(name),
        _ => false,
    }
}

/// Returns true if the given token has the overall shape of a flag, as far as
/// the parser is concerned. This is more permissive than
/// `is_valid_name_for_lookup`: a single dash may be followed by any run of
/// letters (e.g. "-flag"), which is a recognizable flag token, even though it
/// can never actually name a flag.
pub fn is_valid_name_for_parse(token: &str) -> bool {
    match split_dashes(token) {
        Some((2, name)) => FULL_NAME.is_match(name),
        Some((1, name)) => SHORT_NAME_RUN.is_match(name),
        _ => false,
    }
}

/// Splits a token into the number of leading dashes it uses as a prefix (one
/// or two), and the remainder. Tokens without a leading dash have no prefix.
fn split_dashes(token: &str) -> Option<(usize, &str)> {
    if let Some(name) = token.strip_prefix("--") {
        Some((2, name))
    } else if let Some(name) = token.strip_prefix('-') {
        Some((1, name))
    } else {
        None
    }
}

/// FlagName is a strictly valid flag token, with its dash prefix removed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FlagName<'a> {
    /// A flag identified by its full name, e.g. "--flag".
    Full(&'a str),
    /// A flag identified by its short name, e.g. "-f".
    Short(char),
}

impl<'a> FlagName<'a> {
    /// Classify the given token, returning None if it does not satisfy
    /// `is_valid_name_for_lookup`.
    pub fn parse(token: &'a str) -> Option<FlagName<'a>> {
        if !is_valid_name_for_lookup(token) {
            return None;
        }

        match split_dashes(token) {
            Some((2, name)) => Some(FlagName::Full(name)),
            Some((1, name)) => name.chars().next().map(FlagName::Short),
            _ => None,
        }
    }
}
