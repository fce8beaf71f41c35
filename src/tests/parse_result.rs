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
use crate::parse_result::*;
use crate::parser::Parser;
use crate::spec::SpecsBuilder;

fn build_test_parser(name: Option<&str>, short_name: Option<char>) -> Parser {
    SpecsBuilder::new()
        .add_flag(name, short_name, Some("the first flag"))
        .unwrap()
        .build()
}

#[test]
fn test_get_flag_value_by_full_name() {
    let result = build_test_parser(Some("flag"), None).parse(&["--flag"]);
    assert!(result.is_success());
    assert!(result.get_flag_value("--flag").unwrap());
    assert!(result.get_error().is_none());
}

#[test]
fn test_get_flag_value_by_short_name() {
    let result = build_test_parser(None, Some('f')).parse(&["-f"]);
    assert!(result.is_success());
    assert!(result.get_flag_value("-f").unwrap());
    assert!(result.get_error().is_none());
}

#[test]
fn test_get_flag_value_without_help() {
    let parser = SpecsBuilder::new()
        .add_flag(Some("flag"), Some('f'), None)
        .unwrap()
        .build();
    let result = parser.parse(&["--flag"]);
    assert!(result.is_success());
    assert!(result.get_flag_value("-f").unwrap());
}

#[test]
fn test_get_flag_value_either_name() {
    let parser = build_test_parser(Some("flag"), Some('f'));

    let result = parser.parse(&["-f"]);
    assert!(result.is_success());
    assert!(result.get_flag_value("--flag").unwrap());
    assert!(result.get_error().is_none());

    let result = parser.parse(&["--flag"]);
    assert!(result.is_success());
    assert!(result.get_flag_value("-f").unwrap());
    assert!(result.get_error().is_none());
}

#[test]
fn test_get_flag_value_absent() {
    let parser = SpecsBuilder::new()
        .add_flag(Some("flag"), Some('f'), None)
        .unwrap()
        .add_flag(Some("other"), Some('o'), None)
        .unwrap()
        .build();
    let result = parser.parse(&["-f"]);
    assert!(result.is_success());
    assert!(!result.get_flag_value("--other").unwrap());
    assert!(!result.get_flag_value("-o").unwrap());
}

#[test]
fn test_get_flag_value_with_wrong_names() {
    let result = build_test_parser(Some("flag"), Some('f')).parse(&["-f"]);
    assert!(result.is_success());
    assert!(result.get_flag_value("--flag").unwrap());
    assert!(!result.get_flag_value("--f").unwrap());
    assert!(!result.get_flag_value("-flag").unwrap());
    assert!(!result.get_flag_value("-v").unwrap());
    assert!(!result.get_flag_value("-F").unwrap());
    assert!(!result.get_flag_value("-").unwrap());
}

#[test]
fn test_get_flag_value_malformed_query() {
    let result = build_test_parser(Some("flag"), Some('f')).parse(&["-f"]);
    assert!(result.is_success());
    for name in &["flag", "f", "", "--", "-1", "---flag", "--fl ag", "-f1"] {
        match result.get_flag_value(name) {
            Err(Error::MalformedQuery(q)) => assert_eq!(*name, q.as_str()),
            r => panic!("expected malformed query error for '{}', got {:?}", name, r),
        }
    }
}

#[test]
fn test_get_flag_value_after_failed_parse() {
    let parser = build_test_parser(Some("flag"), Some('f'));
    for args in &[vec!["-f", "-flag"], vec!["-f", "-v"], vec!["value"]] {
        let result = parser.parse(args);
        assert!(!result.is_success());
        for name in &["--flag", "-f", "-v", "flag", ""] {
            assert!(matches!(
                result.get_flag_value(name),
                Err(Error::InvalidState)
            ));
        }
    }
}

#[test]
fn test_parse_error_accessors() {
    let result = build_test_parser(Some("flag"), Some('f')).parse(&["-f", "-flag"]);
    assert!(!result.is_success());
    assert_eq!(ErrorCode::InvalidOptionName, result.get_error().unwrap().get_code());
    assert_eq!("-flag", result.get_error().unwrap().get_trigger());

    let result = build_test_parser(Some("flag"), Some('f')).parse(&["-f", "-v"]);
    assert!(!result.is_success());
    assert_eq!(ErrorCode::UndefinedOption, result.get_error().unwrap().get_code());
    assert_eq!("-v", result.get_error().unwrap().get_trigger());
}

#[test]
fn test_parse_error_display() {
    assert_eq!(
        "undefined option: '-v'",
        ParseError::new(ErrorCode::UndefinedOption, "-v").to_string()
    );
    assert_eq!(
        "invalid option name: '-flag'",
        ParseError::new(ErrorCode::InvalidOptionName, "-flag").to_string()
    );
    assert_eq!(
        "free values are not supported: 'value'",
        ParseError::new(ErrorCode::FreeValueNotSupported, "value").to_string()
    );
    assert_eq!(
        "duplicate flag in arguments: '-f'",
        ParseError::new(ErrorCode::DuplicateFlagsInArgs, "-f").to_string()
    );
}
