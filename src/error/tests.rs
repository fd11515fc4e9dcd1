// gsw: GitLab merge request and to-do reports
//
// SPDX-FileCopyrightText: 2026 gsw contributors
// SPDX-License-Identifier: GPL-2.0-or-later

use super::{ConfigError, FieldError, GswError, GswResult, RemoteError, UsageError};

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "gitlab".to_string(),
        key: "token".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"missing required config key 'token' in section '[gitlab]'");
}

#[test]
fn test_unknown_object_display() {
    let err = UsageError::UnknownObject {
        name: "issue".to_string(),
        available: vec!["mr".to_string(), "todo".to_string()],
    };
    insta::assert_snapshot!(err.to_string(), @"unknown object 'issue' (available objects: mr, todo)");
}

#[test]
fn test_field_error_display() {
    let err = FieldError::UnknownField {
        object: "todo",
        field: "colour".to_string(),
        available: "id, project".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"field 'colour' not available for 'todo', available fields: id, project");
}

#[test]
fn test_exit_codes() {
    let cases: Vec<(GswError, u8)> = vec![
        (std::io::Error::other("pipe").into(), 1),
        (GswError::TodoNotFound(7), 1),
        (
            ConfigError::MissingSection {
                section: "gitlab".to_string(),
            }
            .into(),
            2,
        ),
        (
            UsageError::OptionParse {
                message: "bad flag".to_string(),
            }
            .into(),
            2,
        ),
        (
            FieldError::UnknownField {
                object: "mr",
                field: "x".to_string(),
                available: String::new(),
            }
            .into(),
            2,
        ),
        (super::connection_failed("bad url"), 3),
        (
            RemoteError::Http {
                status: 500,
                url: "http://gitlab/api/v4/todos".to_string(),
                message: String::new(),
            }
            .into(),
            4,
        ),
    ];

    for (err, code) in cases {
        assert_eq!(err.exit_code(), code, "unexpected exit code for {err:?}");
    }
}

#[test]
fn test_only_usage_errors_are_usage() {
    let usage: GswError = UsageError::MissingArgument {
        message: "missing <ID>".to_string(),
    }
    .into();
    assert!(usage.is_usage());
    assert!(!GswError::TodoNotFound(1).is_usage());
}

#[test]
fn test_gsw_error_size() {
    // Box<str> (Connection) is the widest payload: 16 bytes + discriminant.
    let size = std::mem::size_of::<GswError>();
    assert!(size <= 24, "GswError is {size} bytes, expected <= 24");
}

#[test]
fn test_gsw_result_size() {
    let size = std::mem::size_of::<GswResult<()>>();
    assert!(size <= 24, "GswResult<()> is {size} bytes, expected <= 24");
}
