// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Console loggers
//!
//! Two variants: the main-process logger prefixes a timestamp, the general
//! logger prefixes a single-word level tag. Both split warn/error onto
//! stderr and treat stream writes as delivered, so `flush` stays the
//! default no-op.

use chrono::Utc;
use colored::Colorize;
use loghub_core::{FormattedLogger, FormattedSink, LogLevel};

fn tag(level: LogLevel) -> &'static str {
	match level {
		LogLevel::Off => "OFF",
		LogLevel::Trace => "TRACE",
		LogLevel::Debug => "DEBUG",
		LogLevel::Info => "INFO",
		LogLevel::Warn => "WARN",
		LogLevel::Error => "ERROR",
	}
}

fn colored_tag(level: LogLevel) -> String {
	match level {
		LogLevel::Trace => tag(level).magenta().to_string(),
		LogLevel::Debug => tag(level).cyan().to_string(),
		LogLevel::Info => tag(level).green().to_string(),
		LogLevel::Warn => tag(level).yellow().to_string(),
		LogLevel::Error => tag(level).red().to_string(),
		LogLevel::Off => tag(level).to_string(),
	}
}

fn write_to_stream(level: LogLevel, line: &str) {
	match level {
		LogLevel::Warn | LogLevel::Error => eprintln!("{}", line),
		_ => println!("{}", line),
	}
}

/// Sink for the privileged/main process: `[main <ISO-8601 timestamp>]`
/// prefix, dimmed when colors are enabled.
pub struct ConsoleMainSink {
	use_colors: bool,
}

impl ConsoleMainSink {
	pub fn new(use_colors: bool) -> Self {
		Self {
			use_colors,
		}
	}

	fn render(&self, message: &str, timestamp: &str) -> String {
		let prefix = format!("[main {}]", timestamp);
		if self.use_colors {
			format!("{} {}", prefix.dimmed(), message)
		} else {
			format!("{} {}", prefix, message)
		}
	}
}

impl FormattedSink for ConsoleMainSink {
	fn emit(&self, level: LogLevel, message: &str) {
		let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string();
		write_to_stream(level, &self.render(message, &timestamp));
	}
}

/// Sink for the general context: single-word level tag, colored when
/// enabled.
pub struct ConsoleSink {
	use_colors: bool,
}

impl ConsoleSink {
	pub fn new(use_colors: bool) -> Self {
		Self {
			use_colors,
		}
	}

	fn render(&self, level: LogLevel, message: &str) -> String {
		if self.use_colors {
			format!("{} {}", colored_tag(level), message)
		} else {
			format!("{} {}", tag(level), message)
		}
	}
}

impl FormattedSink for ConsoleSink {
	fn emit(&self, level: LogLevel, message: &str) {
		write_to_stream(level, &self.render(level, message));
	}
}

pub type ConsoleMainLogger = FormattedLogger<ConsoleMainSink>;
pub type ConsoleLogger = FormattedLogger<ConsoleSink>;

/// Console logger for the main process context.
pub fn console_main_logger(level: LogLevel, use_colors: bool) -> ConsoleMainLogger {
	FormattedLogger::new(ConsoleMainSink::new(use_colors), level)
}

/// Console logger for the general context.
pub fn console_logger(level: LogLevel, use_colors: bool) -> ConsoleLogger {
	FormattedLogger::new(ConsoleSink::new(use_colors), level)
}
