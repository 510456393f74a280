// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Logger construction strategy

use std::sync::Arc;

use loghub_core::{LogLevel, LogResource, Logger, LoggerOptions, Result};
use loghub_sink::console_logger;

/// Strategy for constructing the concrete logger behind a registry entry.
///
/// Supplied to the service at construction. A factory that cannot build its
/// sink must fail here, fatal to the `create_logger` call — never return a
/// silently non-functional logger.
pub trait LoggerFactory: Send + Sync {
	fn create(
		&self,
		resource: &LogResource,
		level: LogLevel,
		options: &LoggerOptions,
	) -> Result<Arc<dyn Logger>>;
}

/// Default factory: a colored console logger per registry entry.
pub struct ConsoleLoggerFactory {
	use_colors: bool,
}

impl ConsoleLoggerFactory {
	pub fn new() -> Self {
		Self {
			use_colors: true,
		}
	}

	pub fn with_colors(mut self, use_colors: bool) -> Self {
		self.use_colors = use_colors;
		self
	}
}

impl Default for ConsoleLoggerFactory {
	fn default() -> Self {
		Self::new()
	}
}

impl LoggerFactory for ConsoleLoggerFactory {
	fn create(
		&self,
		_resource: &LogResource,
		level: LogLevel,
		_options: &LoggerOptions,
	) -> Result<Arc<dyn Logger>> {
		Ok(Arc::new(console_logger(level, self.use_colors)))
	}
}
