// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! The logger capability contract and its implementation strategies

use parking_lot::RwLock;

use crate::{
	diagnostic::invalid_log_level,
	err,
	error::Result,
	level::LogLevel,
	message::{ErrorMessage, MessageArg, format_message},
};

/// A named unit that accepts leveled messages, filters by a mutable level
/// and flushes best-effort.
///
/// `error` accepts an error value in place of a text message; the rendered
/// message is then the error's information, consistent with error-valued
/// extra arguments.
pub trait Logger: Send + Sync {
	fn level(&self) -> LogLevel;

	/// Idempotent: setting the current level again is a no-op.
	fn set_level(&self, level: LogLevel);

	fn trace(&self, message: &str, args: &[MessageArg]);
	fn debug(&self, message: &str, args: &[MessageArg]);
	fn info(&self, message: &str, args: &[MessageArg]);
	fn warn(&self, message: &str, args: &[MessageArg]);
	fn error(&self, message: &ErrorMessage, args: &[MessageArg]);

	/// Synchronous, best-effort. Sinks whose writes are already delivered
	/// keep the default no-op.
	fn flush(&self) {}

	/// Release sink resources. Safe to call repeatedly.
	fn dispose(&self) {}
}

/// Dispatch a write through the level-appropriate method.
///
/// `Off` is not a message severity and is rejected, fatal to this call only.
pub fn log_at(
	logger: &dyn Logger,
	level: LogLevel,
	message: &str,
	args: &[MessageArg],
) -> Result<()> {
	match level {
		LogLevel::Off => err!(invalid_log_level(level)),
		LogLevel::Trace => {
			logger.trace(message, args);
			Ok(())
		}
		LogLevel::Debug => {
			logger.debug(message, args);
			Ok(())
		}
		LogLevel::Info => {
			logger.info(message, args);
			Ok(())
		}
		LogLevel::Warn => {
			logger.warn(message, args);
			Ok(())
		}
		LogLevel::Error => {
			logger.error(&ErrorMessage::Text(message.to_string()), args);
			Ok(())
		}
	}
}

/// Shared mutable level for a logger, checked before any formatting work.
pub struct LevelCell {
	level: RwLock<LogLevel>,
}

impl LevelCell {
	pub fn new(level: LogLevel) -> Self {
		Self {
			level: RwLock::new(level),
		}
	}

	pub fn get(&self) -> LogLevel {
		*self.level.read()
	}

	/// Returns true when the level actually changed.
	pub fn set(&self, level: LogLevel) -> bool {
		let mut current = self.level.write();
		if *current == level {
			return false;
		}
		*current = level;
		true
	}

	pub fn can_log(&self, message_level: LogLevel) -> bool {
		self.level.read().can_log(message_level)
	}
}

/// A sink that wants pre-formatted text: one line per accepted write.
pub trait FormattedSink: Send + Sync {
	fn emit(&self, level: LogLevel, message: &str);

	fn flush(&self) {}

	fn dispose(&self) {}
}

/// Logger over a [`FormattedSink`]: filters, formats once, delegates.
///
/// Formatting is verbose (error source chains included) only while the
/// logger itself filters at `Trace`.
pub struct FormattedLogger<S: FormattedSink> {
	level: LevelCell,
	sink: S,
}

impl<S: FormattedSink> FormattedLogger<S> {
	pub fn new(sink: S, level: LogLevel) -> Self {
		Self {
			level: LevelCell::new(level),
			sink,
		}
	}

	pub fn sink(&self) -> &S {
		&self.sink
	}

	fn write(&self, level: LogLevel, message: &str, args: &[MessageArg]) {
		if !self.level.can_log(level) {
			return;
		}
		let verbose = self.level.get() == LogLevel::Trace;
		let line = if args.is_empty() {
			message.to_string()
		} else {
			format!("{} {}", message, format_message(args, verbose))
		};
		self.sink.emit(level, &line);
	}
}

impl<S: FormattedSink> Logger for FormattedLogger<S> {
	fn level(&self) -> LogLevel {
		self.level.get()
	}

	fn set_level(&self, level: LogLevel) {
		self.level.set(level);
	}

	fn trace(&self, message: &str, args: &[MessageArg]) {
		self.write(LogLevel::Trace, message, args);
	}

	fn debug(&self, message: &str, args: &[MessageArg]) {
		self.write(LogLevel::Debug, message, args);
	}

	fn info(&self, message: &str, args: &[MessageArg]) {
		self.write(LogLevel::Info, message, args);
	}

	fn warn(&self, message: &str, args: &[MessageArg]) {
		self.write(LogLevel::Warn, message, args);
	}

	fn error(&self, message: &ErrorMessage, args: &[MessageArg]) {
		let verbose = self.level.get() == LogLevel::Trace;
		self.write(LogLevel::Error, &message.to_message(verbose), args);
	}

	fn flush(&self) {
		self.sink.flush();
	}

	fn dispose(&self) {
		self.sink.dispose();
	}
}
