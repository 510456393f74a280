// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! No-op logger for disabled logging or bootstrapping

use loghub_core::{ErrorMessage, LogLevel, Logger, MessageArg};

/// Accepts every level and does nothing. The explicit, intentional no-op
/// choice — never a fallback for a failed construction.
pub struct NullLogger;

impl Logger for NullLogger {
	fn level(&self) -> LogLevel {
		LogLevel::Info
	}

	fn set_level(&self, _level: LogLevel) {}

	fn trace(&self, _message: &str, _args: &[MessageArg]) {}

	fn debug(&self, _message: &str, _args: &[MessageArg]) {}

	fn info(&self, _message: &str, _args: &[MessageArg]) {}

	fn warn(&self, _message: &str, _args: &[MessageArg]) {}

	fn error(&self, _message: &ErrorMessage, _args: &[MessageArg]) {}
}

#[cfg(test)]
mod tests {
	use loghub_core::{ErrorMessage, LogLevel, Logger};

	use super::NullLogger;

	#[test]
	fn test_level_is_always_info() {
		let logger = NullLogger;
		logger.set_level(LogLevel::Error);
		assert_eq!(logger.level(), LogLevel::Info);
	}

	#[test]
	fn test_everything_is_a_no_op() {
		let logger = NullLogger;
		logger.trace("t", &[]);
		logger.error(&ErrorMessage::from("e"), &[]);
		logger.flush();
		logger.dispose();
	}
}
