// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Adapter logger: bridge to an external sink function

use std::sync::Arc;

use loghub_core::{ErrorMessage, LevelCell, LogLevel, Logger, MessageArg};

/// The external sink signature: a level and the raw argument list.
pub type AdapterFn = dyn Fn(LogLevel, &[MessageArg]) + Send + Sync;

/// Wraps an external sink function. Filters by its own level before
/// dispatching; on error writes the message position goes through
/// message-extraction (text passthrough, or error-to-message rendering)
/// so the adapter only ever sees argument values.
pub struct AdapterLogger {
	level: LevelCell,
	adapter: Arc<AdapterFn>,
}

impl AdapterLogger {
	pub fn new(adapter: Arc<AdapterFn>, level: LogLevel) -> Self {
		Self {
			level: LevelCell::new(level),
			adapter,
		}
	}

	fn dispatch(&self, level: LogLevel, message: MessageArg, args: &[MessageArg]) {
		if !self.level.can_log(level) {
			return;
		}
		let mut all = Vec::with_capacity(args.len() + 1);
		all.push(message);
		all.extend_from_slice(args);
		(self.adapter)(level, &all);
	}
}

impl Logger for AdapterLogger {
	fn level(&self) -> LogLevel {
		self.level.get()
	}

	fn set_level(&self, level: LogLevel) {
		self.level.set(level);
	}

	fn trace(&self, message: &str, args: &[MessageArg]) {
		self.dispatch(LogLevel::Trace, MessageArg::text(message), args);
	}

	fn debug(&self, message: &str, args: &[MessageArg]) {
		self.dispatch(LogLevel::Debug, MessageArg::text(message), args);
	}

	fn info(&self, message: &str, args: &[MessageArg]) {
		self.dispatch(LogLevel::Info, MessageArg::text(message), args);
	}

	fn warn(&self, message: &str, args: &[MessageArg]) {
		self.dispatch(LogLevel::Warn, MessageArg::text(message), args);
	}

	fn error(&self, message: &ErrorMessage, args: &[MessageArg]) {
		let verbose = self.level.can_log(LogLevel::Trace);
		self.dispatch(LogLevel::Error, MessageArg::text(message.to_message(verbose)), args);
	}
}
