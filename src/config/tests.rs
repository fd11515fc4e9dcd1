// gsw: GitLab merge request and to-do reports
//
// SPDX-FileCopyrightText: 2026 gsw contributors
// SPDX-License-Identifier: GPL-2.0-or-later

use super::{DEFAULT_CONFIG_PATH, RawConfig, RawGitlabSection, RemoteConfig, resolve_config_path};
use crate::error::{ConfigError, GswError};
use std::path::{Path, PathBuf};

fn config_error(err: GswError) -> ConfigError {
    match err {
        GswError::Config(boxed) => *boxed,
        other => panic!("expected GswError::Config, got {other:?}"),
    }
}

#[test]
fn test_parse_complete_section() {
    let config = RemoteConfig::parse(
        "[gitlab]\nurl = https://gitlab.example.com\ntoken = glpat-secret\n",
    )
    .unwrap();
    assert_eq!(config.url(), "https://gitlab.example.com");
    assert_eq!(config.token(), "glpat-secret");
}

#[test]
fn test_parse_ignores_other_sections() {
    let config = RemoteConfig::parse(
        "[other]\nkey = value\n\n[gitlab]\nurl = https://gitlab.example.com\ntoken = t\n",
    )
    .unwrap();
    assert_eq!(config.url(), "https://gitlab.example.com");
}

#[test]
fn test_parse_missing_section() {
    let err = config_error(RemoteConfig::parse("[github]\ntoken = x\n").unwrap_err());
    assert!(
        matches!(err, ConfigError::MissingSection { ref section } if section == "gitlab"),
        "unexpected error: {err:?}"
    );
}

#[test]
fn test_parse_missing_keys() {
    for (content, missing) in [
        ("[gitlab]\ntoken = t\n", "url"),
        ("[gitlab]\nurl = https://gitlab.example.com\n", "token"),
        ("[gitlab]\nurl = https://gitlab.example.com\ntoken =\n", "token"),
    ] {
        let err = config_error(RemoteConfig::parse(content).unwrap_err());
        match err {
            ConfigError::MissingKey { section, key } => {
                assert_eq!(section, "gitlab");
                assert_eq!(key, missing, "content: {content:?}");
            }
            other => panic!("expected MissingKey for {content:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_load_missing_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("absent");
    let err = config_error(RemoteConfig::load(&path).unwrap_err());
    assert!(matches!(err, ConfigError::NotFound(_)), "unexpected: {err:?}");
}

#[test]
fn test_from_raw_trims_values() {
    let raw = RawConfig {
        gitlab: Some(RawGitlabSection {
            url: Some(" https://gitlab.example.com ".to_string()),
            token: Some(" t ".to_string()),
        }),
    };
    let config = RemoteConfig::from_raw(raw).unwrap();
    assert_eq!(config, RemoteConfig::new("https://gitlab.example.com", "t"));
}

#[test]
fn test_debug_hides_token() {
    let config = RemoteConfig::new("https://gitlab.example.com", "glpat-secret");
    let raw = RawGitlabSection {
        url: None,
        token: Some("glpat-secret".to_string()),
    };
    for rendered in [format!("{config:?}"), format!("{raw:?}")] {
        assert!(!rendered.contains("glpat-secret"), "token leaked: {rendered}");
        assert!(rendered.contains("[hidden]"));
    }
}

#[test]
fn test_resolve_explicit_path() {
    let path = resolve_config_path(Some(Path::new("/etc/gsw.ini")));
    assert_eq!(path, PathBuf::from("/etc/gsw.ini"));
}

#[test]
fn test_resolve_default_path() {
    let path = resolve_config_path(None);
    assert!(path.ends_with(DEFAULT_CONFIG_PATH), "got {}", path.display());
}

#[test]
fn test_resolve_expands_home() {
    let path = resolve_config_path(Some(Path::new("~/gsw.ini")));
    assert!(!path.starts_with("~"), "home not expanded: {}", path.display());
    assert!(path.ends_with("gsw.ini"));
}
