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
use crate::parse_and_execute::{parse_and_execute, CommandResult};
use crate::parse_result::ParseResult;
use crate::parser::Parser;
use std::env;
use std::fmt::{Debug, Display};
use std::process;

pub(crate) const EXIT_SUCCESS: i32 = 0;
pub(crate) const EXIT_FAILURE: i32 = 1;

pub(crate) fn get_program_parameters() -> Vec<String> {
    env::args()
        .skip(1) // Skip the first argument, which is our executable.
        .collect()
}

pub(crate) fn handle_result<E: Display + Debug>(r: Result<Option<CommandResult<E>>>) -> i32 {
    match r {
        // No internal error.
        Ok(r) => match r {
            // Flag parsing failed, but usage information was already printed.
            None => EXIT_FAILURE,
            // The program ran, and we got a result back from it.
            Some(r) => match r {
                Ok(_) => EXIT_SUCCESS,
                Err(e) => {
                    eprintln!(
                        "{}",
                        match cfg!(debug_assertions) {
                            false => e.to_string(),
                            true => format!("{:?}", e),
                        }
                    );
                    EXIT_FAILURE
                }
            },
        },
        // An internal error which should be surfaced to the user.
        Err(e) => {
            eprintln!(
                "Error parsing command-line flags: {}",
                match cfg!(debug_assertions) {
                    false => e.to_string(),
                    true => format!("{:?}", e),
                },
            );
            EXIT_FAILURE
        }
    }
}

/// Parse this process's command-line arguments with the given parser, run
/// `callback` with the result if parsing succeeded, and then exit the process.
/// The exit status is zero only if parsing and the callback both succeeded.
pub fn main_impl<E: Display + Debug, F: FnOnce(&ParseResult) -> CommandResult<E>>(
    parser: &Parser,
    callback: F,
) -> ! {
    let program = env::args().next().unwrap_or_default();
    process::exit(handle_result(parse_and_execute(
        program.as_str(),
        &get_program_parameters(),
        parser,
        Some(std::io::stderr()),
        callback,
    )));
}
