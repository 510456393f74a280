// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! No-op service for disabled logging or bootstrapping

use std::sync::Arc;

use loghub_core::{
	LogLevel, Logger, LoggerIdentity, LoggerOptions, LoggerResource, Result, Subscription,
};
use loghub_sink::NullLogger;

use crate::service::{DidChangeLoggersEvent, LogLevelChange, LogService, VisibilityChange};

/// Registers nothing, creates only [`NullLogger`]s and never fires a
/// notification.
pub struct NullLogService;

impl LogService for NullLogService {
	fn create_logger(
		&self,
		_identity: LoggerIdentity,
		_options: LoggerOptions,
	) -> Result<Arc<dyn Logger>> {
		Ok(Arc::new(NullLogger))
	}

	fn get_logger(&self, _identity: LoggerIdentity) -> Option<Arc<dyn Logger>> {
		None
	}

	fn register_logger(&self, _resource: LoggerResource) {}

	fn deregister_logger(&self, _identity: LoggerIdentity) {}

	fn set_default_level(&self, _level: LogLevel) {}

	fn set_level(&self, _identity: LoggerIdentity, _level: LogLevel) {}

	fn default_level(&self) -> LogLevel {
		LogLevel::Info
	}

	fn get_level(&self, _identity: LoggerIdentity) -> LogLevel {
		LogLevel::Info
	}

	fn set_visibility(&self, _identity: LoggerIdentity, _visible: bool) {}

	fn get_registered_loggers(&self) -> Vec<LoggerResource> {
		Vec::new()
	}

	fn dispose(&self) {}

	fn on_did_change_loggers(
		&self,
		_listener: Box<dyn Fn(&DidChangeLoggersEvent) + Send + Sync>,
	) -> Subscription {
		Subscription::none()
	}

	fn on_did_change_log_level(
		&self,
		_listener: Box<dyn Fn(&LogLevelChange) + Send + Sync>,
	) -> Subscription {
		Subscription::none()
	}

	fn on_did_change_visibility(
		&self,
		_listener: Box<dyn Fn(&VisibilityChange) + Send + Sync>,
	) -> Subscription {
		Subscription::none()
	}
}
