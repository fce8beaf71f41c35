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

use thiserror::Error;

/// Error represents the ways in which *callers* of this library can misuse
/// it: defining flags incorrectly, or querying parse results incorrectly.
/// Errors in the command-line arguments themselves are not represented here;
/// those are reported as data, via `ParseResult`.
#[derive(Debug, Error)]
pub enum Error {
    /// A flag's name or short name was not in an acceptable format.
    #[error("invalid flag name format: {0}")]
    InvalidNameFormat(String),
    /// Results can only be queried for flag values if parsing succeeded.
    #[error("flag values are not available from a failed parse")]
    InvalidState,
    /// An I/O error, generally encountered while writing help output.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// A flag value was requested using a name which can't identify any flag.
    #[error("malformed flag query '{0}'")]
    MalformedQuery(String),
    /// A flag was defined with neither a name nor a short name.
    #[error("flags must have a name, a short name, or both")]
    MissingName,
}

/// A Result type which uses this crate's internal Error type.
pub type Result<T> = std::result::Result<T, Error>;
