// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Structured diagnostics and their factory functions

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::level::LogLevel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_fmt(format_args!("{}", self.code))
	}
}

/// A level that cannot be dispatched as a message severity
pub fn invalid_log_level(level: LogLevel) -> Diagnostic {
	Diagnostic {
		code: "LOG_001".to_string(),
		message: format!("'{}' is not a message severity", level),
		label: Some("invalid level for dispatch".to_string()),
		help: Some(
			"Pass one of trace, debug, info, warn or error; 'off' only configures a logger's filter"
				.to_string(),
		),
		notes: vec![],
		cause: None,
	}
}

/// A logger factory failed to construct the underlying sink
pub fn logger_creation(resource: impl Display, reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "LOG_002".to_string(),
		message: format!("Cannot create logger for '{}': {}", resource, reason.into()),
		label: Some("logger construction failed".to_string()),
		help: Some(
			"Use NullLogger/NullLogService when logging is intentionally disabled instead of ignoring this error"
				.to_string(),
		),
		notes: vec![],
		cause: None,
	}
}
