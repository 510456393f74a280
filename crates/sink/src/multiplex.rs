// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Multiplex logger: fan-out to an ordered list of inner loggers

use std::sync::Arc;

use loghub_core::{ErrorMessage, LevelCell, LogLevel, Logger, MessageArg};

/// Fans every write, level-set, flush and dispose out to all inner loggers
/// in list order. Filtering is left to the inner loggers.
///
/// Construction aligns every inner logger to the first one's level; later
/// direct changes to inner loggers are not mirrored back to the composite.
pub struct MultiplexLogger {
	level: LevelCell,
	loggers: Vec<Arc<dyn Logger>>,
}

impl MultiplexLogger {
	pub fn new(loggers: Vec<Arc<dyn Logger>>) -> Self {
		let level = loggers.first().map(|logger| logger.level()).unwrap_or(LogLevel::Info);
		for logger in &loggers {
			logger.set_level(level);
		}
		Self {
			level: LevelCell::new(level),
			loggers,
		}
	}
}

impl Logger for MultiplexLogger {
	fn level(&self) -> LogLevel {
		self.level.get()
	}

	fn set_level(&self, level: LogLevel) {
		for logger in &self.loggers {
			logger.set_level(level);
		}
		self.level.set(level);
	}

	fn trace(&self, message: &str, args: &[MessageArg]) {
		for logger in &self.loggers {
			logger.trace(message, args);
		}
	}

	fn debug(&self, message: &str, args: &[MessageArg]) {
		for logger in &self.loggers {
			logger.debug(message, args);
		}
	}

	fn info(&self, message: &str, args: &[MessageArg]) {
		for logger in &self.loggers {
			logger.info(message, args);
		}
	}

	fn warn(&self, message: &str, args: &[MessageArg]) {
		for logger in &self.loggers {
			logger.warn(message, args);
		}
	}

	fn error(&self, message: &ErrorMessage, args: &[MessageArg]) {
		for logger in &self.loggers {
			logger.error(message, args);
		}
	}

	fn flush(&self) {
		for logger in &self.loggers {
			logger.flush();
		}
	}

	fn dispose(&self) {
		for logger in &self.loggers {
			logger.dispose();
		}
	}
}
