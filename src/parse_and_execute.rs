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
use crate::help;
use crate::parse_result::ParseResult;
use crate::parser::Parser;
use std::io::Write;

/// The result of running a program's implementation once its flags have been
/// parsed.
pub type CommandResult<E> = std::result::Result<(), E>;

/// Parse the given arguments, and then call the given callback with the
/// result, if parsing succeeded.
///
/// If parsing fails instead, the callback is not called. Usage information
/// (including the parse error) is written to `output_writer`, if one is given,
/// and None is returned. An error is only returned if writing that usage
/// information fails.
pub fn parse_and_execute<E, W: Write, F: FnOnce(&ParseResult) -> CommandResult<E>>(
    program: &str,
    args: &[String],
    parser: &Parser,
    mut output_writer: Option<W>,
    callback: F,
) -> Result<Option<CommandResult<E>>> {
    let result = parser.parse(args);
    if let Some(e) = result.get_error() {
        help::print_help(output_writer.as_mut(), program, parser.specs(), Some(e))?;
        return Ok(None);
    }

    Ok(Some(callback(&result)))
}
