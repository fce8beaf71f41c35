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

#![deny(
    anonymous_parameters,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![warn(bare_trait_objects, unreachable_pub, unused_qualifications)]

//! switches is a small library for parsing boolean command-line flags. Flags
//! are defined with a `SpecsBuilder`, which produces a `Parser`; parsing a
//! list of arguments produces a `ParseResult`, which reports which flags were
//! present, or what was wrong with the arguments.

/// error defines the errors returned when this library is used incorrectly.
pub mod error;
/// help provides utilities for printing usage information.
#[cfg(feature = "cli")]
pub mod help;
/// main_impl provides a complete `main` implementation, which parses the
/// process's own arguments.
#[cfg(feature = "cli")]
pub mod main_impl;
/// name defines what counts as a valid flag name.
pub mod name;
/// parse_and_execute ties parsing together with running a program's
/// implementation.
#[cfg(feature = "cli")]
pub mod parse_and_execute;
/// parse_result defines the outcome of parsing a list of arguments.
pub mod parse_result;
/// parser implements parsing arguments against a set of flag definitions.
pub mod parser;
/// spec defines flags, and the builder used to collect them.
pub mod spec;

#[cfg(feature = "cli")]
#[cfg(test)]
mod tests;

// Re-export most commonly used symbols, to allow using this library with just
// one "use".

#[cfg(feature = "cli")]
pub use crate::main_impl::main_impl;
pub use crate::parse_result::{ErrorCode, ParseError, ParseResult};
pub use crate::parser::{DuplicatePolicy, Parser};
pub use crate::spec::{Spec, Specs, SpecsBuilder};
