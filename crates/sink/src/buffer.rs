// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Buffer logger: queue writes until a target logger is attached

use std::sync::Arc;

use loghub_core::{ErrorMessage, LevelCell, LogLevel, Logger, MessageArg};
use parking_lot::Mutex;

enum Pending {
	Leveled(LogLevel, String, Vec<MessageArg>),
	Error(ErrorMessage, Vec<MessageArg>),
}

/// Queues accepted writes while no target logger exists; attaching a target
/// replays the queue in order and forwards everything afterwards. Used to
/// bootstrap logging before the real sink is constructed.
pub struct BufferLogger {
	level: LevelCell,
	target: Mutex<Option<Arc<dyn Logger>>>,
	pending: Mutex<Vec<Pending>>,
}

impl BufferLogger {
	pub fn new(level: LogLevel) -> Self {
		Self {
			level: LevelCell::new(level),
			target: Mutex::new(None),
			pending: Mutex::new(Vec::new()),
		}
	}

	/// Attach the target, replaying queued writes in order.
	pub fn set_logger(&self, logger: Arc<dyn Logger>) {
		let queued = std::mem::take(&mut *self.pending.lock());
		for entry in queued {
			match entry {
				Pending::Leveled(level, message, args) => {
					// Level was already accepted at queue time
					let _ = loghub_core::log_at(logger.as_ref(), level, &message, &args);
				}
				Pending::Error(message, args) => logger.error(&message, &args),
			}
		}
		*self.target.lock() = Some(logger);
	}

	fn write(&self, level: LogLevel, message: &str, args: &[MessageArg]) {
		if !self.level.can_log(level) {
			return;
		}
		if let Some(target) = self.target.lock().as_ref() {
			let _ = loghub_core::log_at(target.as_ref(), level, message, args);
			return;
		}
		self.pending.lock().push(Pending::Leveled(level, message.to_string(), args.to_vec()));
	}
}

impl Logger for BufferLogger {
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
		if !self.level.can_log(LogLevel::Error) {
			return;
		}
		if let Some(target) = self.target.lock().as_ref() {
			target.error(message, args);
			return;
		}
		self.pending.lock().push(Pending::Error(message.clone(), args.to_vec()));
	}

	fn flush(&self) {
		if let Some(target) = self.target.lock().as_ref() {
			target.flush();
		}
	}

	fn dispose(&self) {
		self.pending.lock().clear();
		if let Some(target) = self.target.lock().take() {
			target.dispose();
		}
	}
}
