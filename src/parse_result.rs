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

use crate::error::*;
use crate::name::{self, FlagName};
use crate::spec::Spec;
use std::fmt;

/// ErrorCode identifies what was wrong with the command-line arguments, when
/// parsing them fails.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorCode {
    /// An argument looked like a flag, but isn't a validly formatted flag name
    /// (e.g. "-flag", which uses a single dash with a full name).
    InvalidOptionName,
    /// A validly formatted flag was given, but no such flag is defined.
    UndefinedOption,
    /// A bare value (not prefixed with a dash) was given. Only flags are
    /// supported.
    FreeValueNotSupported,
    /// The same flag was given more than once, and the parser was configured
    /// to reject repeats.
    DuplicateFlagsInArgs,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            ErrorCode::InvalidOptionName => "invalid option name",
            ErrorCode::UndefinedOption => "undefined option",
            ErrorCode::FreeValueNotSupported => "free values are not supported",
            ErrorCode::DuplicateFlagsInArgs => "duplicate flag in arguments",
        })
    }
}

/// ParseError describes the first problem found in a list of command-line
/// arguments.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    code: ErrorCode,
    trigger: String,
}

impl ParseError {
    pub(crate) fn new(code: ErrorCode, trigger: &str) -> Self {
        ParseError {
            code: code,
            trigger: trigger.to_owned(),
        }
    }

    /// Returns what kind of problem was found.
    pub fn get_code(&self) -> ErrorCode {
        self.code
    }

    /// Returns the exact argument which caused the problem.
    pub fn get_trigger(&self) -> &str {
        self.trigger.as_str()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: '{}'", self.code, self.trigger)
    }
}

/// ParseResult is the outcome of parsing one list of command-line arguments.
/// It is either a success, in which case flag values can be queried, or a
/// failure, in which case it carries the error which stopped parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseResult {
    matched: Vec<Spec>,
    error: Option<ParseError>,
}

impl ParseResult {
    pub(crate) fn success(matched: Vec<Spec>) -> Self {
        ParseResult {
            matched: matched,
            error: None,
        }
    }

    pub(crate) fn failure(error: ParseError) -> Self {
        ParseResult {
            matched: vec![],
            error: Some(error),
        }
    }

    /// Returns true if the arguments were parsed without error.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Returns whether or not the flag with the given name was present in the
    /// arguments. The name must be given the same way it would be on the
    /// command line, e.g. "--flag" or "-f"; either form can be used to query a
    /// flag which has both.
    ///
    /// It is an error to call this on a failed parse, or to pass a name which
    /// could not be given as a flag on the command line at all (e.g. "flag",
    /// or "-1"). Any other name which doesn't identify a flag present in the
    /// arguments is simply `false`, whether or not such a flag is defined.
    pub fn get_flag_value(&self, name: &str) -> Result<bool> {
        if !self.is_success() {
            return Err(Error::InvalidState);
        }
        if !name::is_valid_name_for_parse(name) {
            return Err(Error::MalformedQuery(name.to_owned()));
        }

        Ok(match FlagName::parse(name) {
            None => false,
            Some(name) => self.matched.iter().any(|s| s.matches(&name)),
        })
    }

    /// Returns the error which caused parsing to fail, or None if parsing
    /// succeeded.
    pub fn get_error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    /// Returns an Iterator over the flags which were present in the
    /// arguments. Each flag appears once, in the order it was first seen.
    pub fn matched_flags(&self) -> impl Iterator<Item = &Spec> {
        self.matched.iter()
    }
}
