// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogFormat, LogLevel};

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(6).is_ok());
    let err = LogLevel::new(7).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'log_level' in section '[global]': log level must be 0-6, got 7"
    );
}

#[test]
fn test_log_level_filters() {
    assert_eq!(LogLevel::SILENT.to_filter_string(), "off");
    assert_eq!(LogLevel::ERROR.to_filter_string(), "error");
    assert!(LogLevel::INFO.to_filter_string().starts_with("info,"));
    assert_eq!(LogLevel::DUMP.to_filter_string(), "trace");
    assert_eq!(LogLevel::SILENT.to_tracing_level(), None);
    assert_eq!(
        LogLevel::DEBUG.to_tracing_level(),
        Some(tracing::Level::DEBUG)
    );
}

#[test]
fn test_log_level_from_u8() {
    assert_eq!(LogLevel::from_u8(4), Some(LogLevel::DEBUG));
    assert_eq!(LogLevel::from_u8(9), None);
    assert_eq!(u8::from(LogLevel::TRACE), 5);
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert_eq!(config.log_file(), None);
    assert_eq!(config.file_format(), LogFormat::Text);
    assert!(!config.show_target());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::WARN)
        .with_log_file("scan.log".to_string())
        .with_file_format(LogFormat::Json)
        .build();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.log_file(), Some("scan.log"));
    assert_eq!(config.file_format(), LogFormat::Json);
}
