// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! The logger registry service

use std::{path::PathBuf, sync::Arc};

use indexmap::IndexMap;
use loghub_core::{
	Emitter, LevelSetting, LogLevel, LogResource, Logger, LoggerIdentity, LoggerOptions,
	LoggerResource, Result, Subscription,
};
use parking_lot::RwLock;

use crate::factory::LoggerFactory;

/// Loggers were added to or removed from the registry. Fired with a single
/// resource per mutation; the vectors allow batched payloads to reuse the
/// same type.
#[derive(Debug, Clone, PartialEq)]
pub struct DidChangeLoggersEvent {
	pub added: Vec<LoggerResource>,
	pub removed: Vec<LoggerResource>,
}

/// The service default or one logger's level changed.
#[derive(Debug, Clone, PartialEq)]
pub enum LogLevelChange {
	Default(LogLevel),
	Logger(LogResource, LogLevel),
}

/// A logger's hidden flag toggled.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityChange {
	pub resource: LoggerResource,
	pub visible: bool,
}

/// The registry contract, implemented by [`LoggerService`] and the null
/// service. Constructed once at process start and passed to callers
/// explicitly — there is no ambient global.
pub trait LogService: Send + Sync {
	/// Get-or-create: an existing live logger is returned unchanged and
	/// `options` are ignored. Does not fire the loggers-changed event.
	fn create_logger(
		&self,
		identity: LoggerIdentity,
		options: LoggerOptions,
	) -> Result<Arc<dyn Logger>>;

	/// Pure lookup, no side effect.
	fn get_logger(&self, identity: LoggerIdentity) -> Option<Arc<dyn Logger>>;

	/// Upsert metadata only; a new identity fires "added", a known one
	/// reconciles just the hidden flag.
	fn register_logger(&self, resource: LoggerResource);

	/// Dispose and remove; silent no-op when absent.
	fn deregister_logger(&self, identity: LoggerIdentity);

	/// Set the service default and push it to every logger without an
	/// explicit override.
	fn set_default_level(&self, level: LogLevel);

	/// Scoped level change; silent no-op on unknown identities. Storing
	/// the service default collapses the override to "inherit".
	fn set_level(&self, identity: LoggerIdentity, level: LogLevel);

	fn default_level(&self) -> LogLevel;

	/// Explicit override if set, else the service default.
	fn get_level(&self, identity: LoggerIdentity) -> LogLevel;

	/// Toggle the hidden flag; fires only when it actually changes.
	fn set_visibility(&self, identity: LoggerIdentity, visible: bool);

	/// Stable insertion-ordered snapshot of the registered metadata.
	fn get_registered_loggers(&self) -> Vec<LoggerResource>;

	/// Dispose every live logger and clear the registry. Idempotent.
	fn dispose(&self);

	fn on_did_change_loggers(
		&self,
		listener: Box<dyn Fn(&DidChangeLoggersEvent) + Send + Sync>,
	) -> Subscription;

	fn on_did_change_log_level(
		&self,
		listener: Box<dyn Fn(&LogLevelChange) + Send + Sync>,
	) -> Subscription;

	fn on_did_change_visibility(
		&self,
		listener: Box<dyn Fn(&VisibilityChange) + Send + Sync>,
	) -> Subscription;
}

struct LoggerEntry {
	resource: LoggerResource,
	/// Metadata may be registered without ever materializing a logger.
	logger: Option<Arc<dyn Logger>>,
}

/// Process-wide logger registry: maps canonical resources to
/// (metadata, optional live logger) pairs and announces every change.
pub struct LoggerService {
	logs_home: PathBuf,
	default_level: RwLock<LogLevel>,
	entries: RwLock<IndexMap<LogResource, LoggerEntry>>,
	factory: Box<dyn LoggerFactory>,
	did_change_loggers: Emitter<DidChangeLoggersEvent>,
	did_change_log_level: Emitter<LogLevelChange>,
	did_change_visibility: Emitter<VisibilityChange>,
}

impl LoggerService {
	pub fn new(
		logs_home: impl Into<PathBuf>,
		default_level: LogLevel,
		factory: Box<dyn LoggerFactory>,
	) -> Self {
		Self {
			logs_home: logs_home.into(),
			default_level: RwLock::new(default_level),
			entries: RwLock::new(IndexMap::new()),
			factory,
			did_change_loggers: Emitter::new(),
			did_change_log_level: Emitter::new(),
			did_change_visibility: Emitter::new(),
		}
	}

	fn resolve(&self, identity: &LoggerIdentity) -> LogResource {
		identity.resolve(&self.logs_home)
	}
}

impl LogService for LoggerService {
	fn create_logger(
		&self,
		identity: LoggerIdentity,
		options: LoggerOptions,
	) -> Result<Arc<dyn Logger>> {
		let resource = self.resolve(&identity);

		// The write lock spans the whole get-or-create so concurrent
		// calls for one identity cannot construct two loggers.
		let mut entries = self.entries.write();

		if let Some(entry) = entries.get(&resource) {
			if let Some(logger) = &entry.logger {
				return Ok(Arc::clone(logger));
			}
		}

		let configured = entries.get(&resource).and_then(|entry| entry.resource.level);
		let level = options
			.log_level
			.map(LevelSetting::to_level)
			.or(configured)
			.unwrap_or(*self.default_level.read());

		let logger = self.factory.create(&resource, level, &options)?;

		match entries.get_mut(&resource) {
			// Announced but not instantiated until now
			Some(entry) => entry.logger = Some(Arc::clone(&logger)),
			None => {
				let id = options.id.clone().unwrap_or_else(|| resource.stable_id());
				let metadata = LoggerResource {
					resource: resource.clone(),
					id,
					name: options.name.clone(),
					level: options.log_level.map(LevelSetting::to_level),
					hidden: options.hidden,
					when: options.when.clone(),
					extension_id: options.extension_id.clone(),
					group: options.group.clone(),
				};
				entries.insert(resource, LoggerEntry {
					resource: metadata,
					logger: Some(Arc::clone(&logger)),
				});
			}
		}

		Ok(logger)
	}

	fn get_logger(&self, identity: LoggerIdentity) -> Option<Arc<dyn Logger>> {
		let resource = self.resolve(&identity);
		self.entries.read().get(&resource).and_then(|entry| entry.logger.clone())
	}

	fn register_logger(&self, resource: LoggerResource) {
		let key = resource.resource.clone();
		{
			let mut entries = self.entries.write();
			if entries.contains_key(&key) {
				drop(entries);
				// Known identity: reconcile only the hidden flag
				self.set_visibility(LoggerIdentity::from(&key), !resource.hidden);
				return;
			}
			entries.insert(key, LoggerEntry {
				resource: resource.clone(),
				logger: None,
			});
		}
		self.did_change_loggers.fire(&DidChangeLoggersEvent {
			added: vec![resource],
			removed: vec![],
		});
	}

	fn deregister_logger(&self, identity: LoggerIdentity) {
		let resource = self.resolve(&identity);
		let entry = {
			let mut entries = self.entries.write();
			match entries.shift_remove(&resource) {
				Some(entry) => entry,
				None => return,
			}
		};
		if let Some(logger) = entry.logger {
			logger.dispose();
		}
		self.did_change_loggers.fire(&DidChangeLoggersEvent {
			added: vec![],
			removed: vec![entry.resource],
		});
	}

	fn set_default_level(&self, level: LogLevel) {
		{
			let mut default = self.default_level.write();
			if *default == level {
				return;
			}
			*default = level;
		}
		{
			let mut entries = self.entries.write();
			for entry in entries.values_mut() {
				// An override equal to the new default collapses
				// to "inherit"; effective level is unchanged
				if entry.resource.level == Some(level) {
					entry.resource.level = None;
				}
				if entry.resource.level.is_none() {
					if let Some(logger) = &entry.logger {
						logger.set_level(level);
					}
				}
			}
		}
		self.did_change_log_level.fire(&LogLevelChange::Default(level));
	}

	fn set_level(&self, identity: LoggerIdentity, level: LogLevel) {
		let resource = self.resolve(&identity);
		let default = *self.default_level.read();
		{
			let mut entries = self.entries.write();
			let Some(entry) = entries.get_mut(&resource) else {
				return;
			};
			if entry.resource.level == Some(level) {
				return;
			}
			// Equal to the default collapses to "inherit"
			entry.resource.level = if level == default {
				None
			} else {
				Some(level)
			};
			if let Some(logger) = &entry.logger {
				logger.set_level(level);
			}
		}
		self.did_change_log_level.fire(&LogLevelChange::Logger(resource, level));
	}

	fn default_level(&self) -> LogLevel {
		*self.default_level.read()
	}

	fn get_level(&self, identity: LoggerIdentity) -> LogLevel {
		let resource = self.resolve(&identity);
		self.entries
			.read()
			.get(&resource)
			.and_then(|entry| entry.resource.level)
			.unwrap_or(*self.default_level.read())
	}

	fn set_visibility(&self, identity: LoggerIdentity, visible: bool) {
		let resource = self.resolve(&identity);
		let metadata = {
			let mut entries = self.entries.write();
			let Some(entry) = entries.get_mut(&resource) else {
				return;
			};
			let hidden = !visible;
			if entry.resource.hidden == hidden {
				return;
			}
			entry.resource.hidden = hidden;
			entry.resource.clone()
		};
		self.did_change_visibility.fire(&VisibilityChange {
			resource: metadata,
			visible,
		});
	}

	fn get_registered_loggers(&self) -> Vec<LoggerResource> {
		self.entries.read().values().map(|entry| entry.resource.clone()).collect()
	}

	fn dispose(&self) {
		let drained: Vec<LoggerEntry> = {
			let mut entries = self.entries.write();
			entries.drain(..).map(|(_, entry)| entry).collect()
		};
		for entry in drained {
			if let Some(logger) = entry.logger {
				logger.dispose();
			}
		}
	}

	fn on_did_change_loggers(
		&self,
		listener: Box<dyn Fn(&DidChangeLoggersEvent) + Send + Sync>,
	) -> Subscription {
		self.did_change_loggers.subscribe(listener)
	}

	fn on_did_change_log_level(
		&self,
		listener: Box<dyn Fn(&LogLevelChange) + Send + Sync>,
	) -> Subscription {
		self.did_change_log_level.subscribe(listener)
	}

	fn on_did_change_visibility(
		&self,
		listener: Box<dyn Fn(&VisibilityChange) + Send + Sync>,
	) -> Subscription {
		self.did_change_visibility.subscribe(listener)
	}
}

impl Drop for LoggerService {
	fn drop(&mut self) {
		self.dispose();
	}
}
