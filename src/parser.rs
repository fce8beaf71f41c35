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

use crate::name::FlagName;
use crate::parse_result::{ErrorCode, ParseError, ParseResult};
use crate::spec::{Spec, Specs};
use log::{debug, trace};

/// DuplicatePolicy determines what happens when the same flag is given more
/// than once in a single list of arguments (either by repeating the exact same
/// argument, or by giving both its full and short names).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DuplicatePolicy {
    /// Repeated flags are fine; the flag is simply present.
    Allow,
    /// Repeated flags are an error (`ErrorCode::DuplicateFlagsInArgs`).
    Deny,
}

impl Default for DuplicatePolicy {
    fn default() -> Self {
        DuplicatePolicy::Allow
    }
}

/// Parser parses lists of command-line arguments against a fixed set of flag
/// definitions. Parsers are constructed with `SpecsBuilder`.
#[derive(Clone, Debug)]
pub struct Parser {
    specs: Specs,
    duplicate_policy: DuplicatePolicy,
}

impl Parser {
    pub(crate) fn new(specs: Specs, duplicate_policy: DuplicatePolicy) -> Self {
        Parser {
            specs: specs,
            duplicate_policy: duplicate_policy,
        }
    }

    /// Returns the flag definitions this parser recognizes.
    pub fn specs(&self) -> &Specs {
        &self.specs
    }

    /// Returns how this parser treats repeated flags.
    pub fn get_duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy
    }

    fn parse_arg<'s>(
        &'s self,
        arg: &str,
        matched: &[Spec],
    ) -> Result<Option<&'s Spec>, ParseError> {
        if !arg.starts_with('-') {
            return Err(ParseError::new(ErrorCode::FreeValueNotSupported, arg));
        }

        let name = match FlagName::parse(arg) {
            None => return Err(ParseError::new(ErrorCode::InvalidOptionName, arg)),
            Some(name) => name,
        };

        let spec = match self.specs.find_named_spec(&name) {
            None => return Err(ParseError::new(ErrorCode::UndefinedOption, arg)),
            Some(spec) => spec,
        };

        if matched.contains(spec) {
            return match self.duplicate_policy {
                DuplicatePolicy::Allow => {
                    debug!("ignoring repeated flag '{}'", arg);
                    Ok(None)
                }
                DuplicatePolicy::Deny => {
                    Err(ParseError::new(ErrorCode::DuplicateFlagsInArgs, arg))
                }
            };
        }

        Ok(Some(spec))
    }

    /// Parse the given arguments. Each argument must be a single flag, either
    /// "--name" or "-n"; parsing stops at the first argument which isn't a
    /// flag this parser recognizes, and the returned result records that
    /// argument as the error's trigger.
    ///
    /// Parsing depends only on this parser and the given arguments, so
    /// parsing the same arguments again always produces an equal result.
    pub fn parse<S: AsRef<str>>(&self, args: &[S]) -> ParseResult {
        let mut matched: Vec<Spec> = Vec::new();
        for arg in args.iter().map(|a| a.as_ref()) {
            trace!("parsing argument '{}'", arg);
            match self.parse_arg(arg, &matched) {
                Ok(Some(spec)) => matched.push(spec.clone()),
                Ok(None) => {}
                Err(e) => {
                    debug!("parsing command-line flags failed: {}", e);
                    return ParseResult::failure(e);
                }
            }
        }
        ParseResult::success(matched)
    }
}
