// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Log severity levels and level filtering

use std::fmt;

use serde::{Deserialize, Serialize};

/// Log severity levels.
///
/// `Off` is a sentinel meaning "never log" and orders below every message
/// severity. Comparison is by ordinal.
#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	Hash,
	Serialize,
	Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
	Off = 0,
	Trace = 1,
	Debug = 2,
	Info = 3,
	Warn = 4,
	Error = 5,
}

impl LogLevel {
	/// Whether a logger filtering at `self` lets a message of
	/// `message_level` through. `Off` suppresses everything.
	pub fn can_log(&self, message_level: LogLevel) -> bool {
		*self != LogLevel::Off && *self <= message_level
	}

	/// Parse a level name. Case-sensitive; `critical` aliases `Error`.
	/// Unrecognized input yields `None`, not an error — callers fall
	/// back to a default.
	pub fn parse(value: &str) -> Option<LogLevel> {
		match value {
			"trace" => Some(LogLevel::Trace),
			"debug" => Some(LogLevel::Debug),
			"info" => Some(LogLevel::Info),
			"warn" => Some(LogLevel::Warn),
			"error" => Some(LogLevel::Error),
			"critical" => Some(LogLevel::Error),
			"off" => Some(LogLevel::Off),
			_ => None,
		}
	}

	/// Canonical name. `critical` is never produced.
	pub fn as_str(&self) -> &'static str {
		match self {
			LogLevel::Off => "off",
			LogLevel::Trace => "trace",
			LogLevel::Debug => "debug",
			LogLevel::Info => "info",
			LogLevel::Warn => "warn",
			LogLevel::Error => "error",
		}
	}
}

impl fmt::Display for LogLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}
