// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Builder pattern for configuring the logger service

use std::path::PathBuf;

use loghub_core::LogLevel;

use crate::{
	factory::{ConsoleLoggerFactory, LoggerFactory},
	service::LoggerService,
};

/// Builder for configuring a [`LoggerService`].
pub struct LogServiceBuilder {
	logs_home: PathBuf,
	default_level: LogLevel,
	factory: Option<Box<dyn LoggerFactory>>,
}

impl LogServiceBuilder {
	/// Create a new builder rooted at the given logs-home directory.
	pub fn new(logs_home: impl Into<PathBuf>) -> Self {
		Self {
			logs_home: logs_home.into(),
			default_level: LogLevel::Info,
			factory: None,
		}
	}

	pub fn default_level(mut self, level: LogLevel) -> Self {
		self.default_level = level;
		self
	}

	/// Supply the logger construction strategy.
	pub fn factory(mut self, factory: Box<dyn LoggerFactory>) -> Self {
		self.factory = Some(factory);
		self
	}

	/// Construct loggers as console loggers with the given color setting.
	pub fn with_console(self, use_colors: bool) -> Self {
		self.factory(Box::new(ConsoleLoggerFactory::new().with_colors(use_colors)))
	}

	pub fn build(self) -> LoggerService {
		// If no factory configured, fall back to the colored console
		let factory = self
			.factory
			.unwrap_or_else(|| Box::new(ConsoleLoggerFactory::new()));
		LoggerService::new(self.logs_home, self.default_level, factory)
	}
}

#[cfg(test)]
mod tests {
	use loghub_core::LogLevel;

	use super::LogServiceBuilder;
	use crate::service::LogService;

	#[test]
	fn test_defaults() {
		let service = LogServiceBuilder::new("/var/log/app").build();
		assert_eq!(service.default_level(), LogLevel::Info);
		assert!(service.get_registered_loggers().is_empty());
	}

	#[test]
	fn test_configured_default_level() {
		let service = LogServiceBuilder::new("/var/log/app")
			.default_level(LogLevel::Debug)
			.build();
		assert_eq!(service.default_level(), LogLevel::Debug);
	}
}
