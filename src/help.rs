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
use crate::parse_result::ParseError;
use crate::spec::Specs;
use std::io::Write;

/// Print usage information for a program which accepts the given flags. If a
/// parse error is given, it is printed first. If no writer is given, nothing
/// is printed at all.
pub fn print_help<W: Write>(
    f: Option<&mut W>,
    program: &str,
    specs: &Specs,
    error: Option<&ParseError>,
) -> Result<()> {
    let f = match f {
        None => return Ok(()),
        Some(f) => f,
    };

    if let Some(error) = error {
        f.write_fmt(format_args!("{}\n\n", error))?;
    }

    f.write_fmt(format_args!("Usage: {} [flags ...]\n", program))?;
    if specs.is_empty() {
        return Ok(());
    }

    f.write_fmt(format_args!("\nFlags:\n"))?;
    for spec in specs.iter() {
        let names: Vec<String> = spec
            .get_name()
            .map(|n| format!("--{}", n))
            .into_iter()
            .chain(spec.get_short_name().map(|sn| format!("-{}", sn)))
            .collect();
        f.write_fmt(format_args!("\t{}", names.join(", ")))?;
        if let Some(help) = spec.get_help() {
            f.write_fmt(format_args!(" - {}", help))?;
        }
        f.write_fmt(format_args!(" [Boolean, default: false]\n"))?;
    }

    Ok(())
}
