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
use crate::parser::{DuplicatePolicy, Parser};
use log::debug;

/// Spec describes a single boolean flag, in such a way that the parser can
/// correctly identify it in the set of arguments given on the command-line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Spec {
    /// The full name of this flag, which identifies it like "--flag".
    name: Option<String>,
    /// The short name of this flag, which identifies it like "-f".
    short_name: Option<char>,
    /// The help string to print out for this flag when applicable.
    help: Option<String>,
}

impl Spec {
    fn new(name: Option<&str>, short_name: Option<char>, help: Option<&str>) -> Result<Spec> {
        if name.is_none() && short_name.is_none() {
            return Err(Error::MissingName);
        }

        if let Some(name) = name {
            if !name::is_valid_full_name(name) {
                return Err(Error::InvalidNameFormat(format!(
                    "'{}' is not a valid flag name",
                    name
                )));
            }
        }

        if let Some(short_name) = short_name {
            if !name::is_valid_short_name(short_name) {
                return Err(Error::InvalidNameFormat(format!(
                    "{:?} is not a valid flag short name",
                    short_name
                )));
            }
        }

        Ok(Spec {
            name: name.map(|n| n.to_owned()),
            short_name: short_name,
            help: help.map(|h| h.to_owned()),
        })
    }

    /// Returns this flag's full name, if it has one.
    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns this flag's short name, if it has one.
    pub fn get_short_name(&self) -> Option<char> {
        self.short_name
    }

    /// Returns the human-readable help text for this flag, if any.
    pub fn get_help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Returns true if the given name identifies this flag.
    pub fn matches(&self, name: &FlagName<'_>) -> bool {
        match *name {
            FlagName::Full(n) => self.get_name() == Some(n),
            FlagName::Short(sn) => self.short_name == Some(sn),
        }
    }
}

/// SpecsBuilder accumulates flag definitions. Each definition is validated as
/// it is added; once all flags have been added, `build` seals the set of flags
/// and returns a `Parser` for them.
#[derive(Debug, Default)]
pub struct SpecsBuilder {
    specs: Vec<Spec>,
    duplicate_policy: DuplicatePolicy,
}

impl SpecsBuilder {
    /// Construct a new builder with no flags defined.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a new boolean flag. At least one of `name` or `short_name` must
    /// be given. The name must consist of letters, digits, underscores, and
    /// hyphens (but must not start with a hyphen); the short name must be a
    /// single ASCII letter. The help text is optional, and is never validated.
    ///
    /// Duplicate names across flags are not detected; when looking flags up,
    /// the first matching definition wins.
    pub fn add_flag(
        mut self,
        name: Option<&str>,
        short_name: Option<char>,
        help: Option<&str>,
    ) -> Result<Self> {
        let spec = Spec::new(name, short_name, help).map_err(|e| {
            debug!("rejected flag definition {:?} / {:?}: {}", name, short_name, e);
            e
        })?;
        self.specs.push(spec);
        Ok(self)
    }

    /// Change how the resulting parser treats the same flag being specified
    /// more than once. By default, repeats are allowed.
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Seal the set of defined flags, returning a parser which recognizes them.
    pub fn build(self) -> Parser {
        Parser::new(Specs { specs: self.specs }, self.duplicate_policy)
    }
}

/// Specs is the complete, immutable set of flags a `Parser` recognizes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Specs {
    specs: Vec<Spec>,
}

impl Specs {
    /// Returns an Iterator over the Spec structures this Specs contains, in
    /// the order in which they were defined.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Spec> {
        self.specs.iter()
    }

    /// Returns the number of flags defined.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns true if no flags are defined at all.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Locate the first Spec which the given name identifies. The name might
    /// either be a short name or a full name, depending on how it was specified
    /// on the command line.
    pub fn find_named_spec(&self, name: &FlagName<'_>) -> Option<&Spec> {
        self.specs.iter().find(|s| s.matches(name))
    }
}
