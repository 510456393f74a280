// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Registry service behavior across create, register, level and visibility
//! flows.

use std::sync::{
	Arc, Mutex,
	atomic::{AtomicUsize, Ordering},
};

use loghub_core::{
	ErrorMessage, LevelCell, LogLevel, LogResource, Logger, LoggerIdentity, LoggerOptions,
	LoggerResource, MessageArg, Result, err,
	diagnostic::logger_creation,
};
use loghub_service::{
	DidChangeLoggersEvent, LogLevelChange, LogService, LogServiceBuilder, LoggerFactory,
	LoggerService, VisibilityChange,
};

const LOGS_HOME: &str = "/var/log/app";

struct RecordingLogger {
	level: LevelCell,
	disposals: AtomicUsize,
}

impl Logger for RecordingLogger {
	fn level(&self) -> LogLevel {
		self.level.get()
	}

	fn set_level(&self, level: LogLevel) {
		self.level.set(level);
	}

	fn trace(&self, _message: &str, _args: &[MessageArg]) {}

	fn debug(&self, _message: &str, _args: &[MessageArg]) {}

	fn info(&self, _message: &str, _args: &[MessageArg]) {}

	fn warn(&self, _message: &str, _args: &[MessageArg]) {}

	fn error(&self, _message: &ErrorMessage, _args: &[MessageArg]) {}

	fn dispose(&self) {
		self.disposals.fetch_add(1, Ordering::SeqCst);
	}
}

#[derive(Default)]
struct RecordingFactory {
	created: Mutex<Vec<Arc<RecordingLogger>>>,
}

impl LoggerFactory for RecordingFactory {
	fn create(
		&self,
		_resource: &LogResource,
		level: LogLevel,
		_options: &LoggerOptions,
	) -> Result<Arc<dyn Logger>> {
		let logger = Arc::new(RecordingLogger {
			level: LevelCell::new(level),
			disposals: AtomicUsize::new(0),
		});
		self.created.lock().unwrap().push(Arc::clone(&logger));
		Ok(logger)
	}
}

struct FailingFactory;

impl LoggerFactory for FailingFactory {
	fn create(
		&self,
		resource: &LogResource,
		_level: LogLevel,
		_options: &LoggerOptions,
	) -> Result<Arc<dyn Logger>> {
		err!(logger_creation(resource, "sink unavailable"))
	}
}

fn service() -> (Arc<LoggerService>, Arc<RecordingFactory>) {
	// The factory is shared so tests can inspect what was constructed
	let factory = Arc::new(RecordingFactory::default());
	let service = Arc::new(LoggerService::new(
		LOGS_HOME,
		LogLevel::Info,
		Box::new(SharedFactory(Arc::clone(&factory))),
	));
	(service, factory)
}

struct SharedFactory(Arc<RecordingFactory>);

impl LoggerFactory for SharedFactory {
	fn create(
		&self,
		resource: &LogResource,
		level: LogLevel,
		options: &LoggerOptions,
	) -> Result<Arc<dyn Logger>> {
		self.0.create(resource, level, options)
	}
}

fn collect_loggers_events(
	service: &LoggerService,
) -> (Arc<Mutex<Vec<DidChangeLoggersEvent>>>, loghub_core::Subscription) {
	let events = Arc::new(Mutex::new(Vec::new()));
	let sink = Arc::clone(&events);
	let subscription =
		service.on_did_change_loggers(Box::new(move |event| sink.lock().unwrap().push(event.clone())));
	(events, subscription)
}

fn collect_level_events(
	service: &LoggerService,
) -> (Arc<Mutex<Vec<LogLevelChange>>>, loghub_core::Subscription) {
	let events = Arc::new(Mutex::new(Vec::new()));
	let sink = Arc::clone(&events);
	let subscription = service
		.on_did_change_log_level(Box::new(move |event| sink.lock().unwrap().push(event.clone())));
	(events, subscription)
}

fn collect_visibility_events(
	service: &LoggerService,
) -> (Arc<Mutex<Vec<VisibilityChange>>>, loghub_core::Subscription) {
	let events = Arc::new(Mutex::new(Vec::new()));
	let sink = Arc::clone(&events);
	let subscription = service
		.on_did_change_visibility(Box::new(move |event| sink.lock().unwrap().push(event.clone())));
	(events, subscription)
}

#[test]
fn test_create_is_get_or_create() {
	let (service, factory) = service();
	let (events, _subscription) = collect_loggers_events(&service);

	let first = service.create_logger("network".into(), LoggerOptions::default()).unwrap();
	let second = service.create_logger("network".into(), LoggerOptions::default()).unwrap();

	assert!(Arc::ptr_eq(&first, &second));
	assert_eq!(factory.created.lock().unwrap().len(), 1);
	// Creation never fires the loggers-changed notification
	assert!(events.lock().unwrap().is_empty());
}

#[test]
fn test_options_on_repeat_create_are_ignored() {
	let (service, _factory) = service();

	let first = service.create_logger("network".into(), LoggerOptions::default()).unwrap();
	let second = service
		.create_logger("network".into(), LoggerOptions {
			log_level: Some(loghub_core::LevelSetting::Level(LogLevel::Error)),
			..LoggerOptions::default()
		})
		.unwrap();

	assert!(Arc::ptr_eq(&first, &second));
	assert_eq!(second.level(), LogLevel::Info);
}

#[test]
fn test_both_addressing_modes_reach_one_entry() {
	let (service, factory) = service();

	let by_id = service.create_logger("network".into(), LoggerOptions::default()).unwrap();
	let resource = LogResource::new(format!("{}/network.log", LOGS_HOME));
	let by_resource =
		service.create_logger(LoggerIdentity::from(resource), LoggerOptions::default()).unwrap();

	assert!(Arc::ptr_eq(&by_id, &by_resource));
	assert_eq!(factory.created.lock().unwrap().len(), 1);
}

#[test]
fn test_always_sentinel_maps_to_trace() {
	let (service, _factory) = service();

	let logger = service
		.create_logger("verbose".into(), LoggerOptions {
			log_level: Some(loghub_core::LevelSetting::Always),
			..LoggerOptions::default()
		})
		.unwrap();

	assert_eq!(logger.level(), LogLevel::Trace);
}

#[test]
fn test_synthesized_id_is_the_stable_hash() {
	let (service, _factory) = service();

	service.create_logger("network".into(), LoggerOptions::default()).unwrap();

	let registered = service.get_registered_loggers();
	assert_eq!(registered.len(), 1);
	let expected = LogResource::new(format!("{}/network.log", LOGS_HOME)).stable_id();
	assert_eq!(registered[0].id, expected);
}

#[test]
fn test_preregistered_level_seeds_the_new_logger() {
	let (service, _factory) = service();

	let resource = LogResource::new(format!("{}/db.log", LOGS_HOME));
	service.register_logger(
		LoggerResource::new(resource.clone(), "db").with_level(LogLevel::Warn),
	);

	let logger = service
		.create_logger(LoggerIdentity::from(resource), LoggerOptions::default())
		.unwrap();
	assert_eq!(logger.level(), LogLevel::Warn);
}

#[test]
fn test_register_fires_added_once() {
	let (service, _factory) = service();
	let (events, _subscription) = collect_loggers_events(&service);

	let resource = LogResource::new(format!("{}/db.log", LOGS_HOME));
	let metadata = LoggerResource::new(resource.clone(), "db");
	service.register_logger(metadata.clone());

	let events = events.lock().unwrap();
	assert_eq!(events.len(), 1);
	assert_eq!(events[0].added, vec![metadata]);
	assert!(events[0].removed.is_empty());
}

#[test]
fn test_reregister_reconciles_only_visibility() {
	let (service, _factory) = service();

	let resource = LogResource::new(format!("{}/db.log", LOGS_HOME));
	service.register_logger(LoggerResource::new(resource.clone(), "db"));

	let (loggers_events, _s1) = collect_loggers_events(&service);
	let (visibility_events, _s2) = collect_visibility_events(&service);

	// Same identity, now hidden: no duplicate entry, no "added"
	service.register_logger(LoggerResource::new(resource.clone(), "db").with_hidden(true));

	assert!(loggers_events.lock().unwrap().is_empty());
	let visibility = visibility_events.lock().unwrap();
	assert_eq!(visibility.len(), 1);
	assert!(!visibility[0].visible);
	assert_eq!(service.get_registered_loggers().len(), 1);
	assert!(service.get_registered_loggers()[0].hidden);
}

#[test]
fn test_reregister_with_same_visibility_is_silent() {
	let (service, _factory) = service();

	let resource = LogResource::new(format!("{}/db.log", LOGS_HOME));
	service.register_logger(LoggerResource::new(resource.clone(), "db"));

	let (loggers_events, _s1) = collect_loggers_events(&service);
	let (visibility_events, _s2) = collect_visibility_events(&service);

	service.register_logger(LoggerResource::new(resource, "db"));

	assert!(loggers_events.lock().unwrap().is_empty());
	assert!(visibility_events.lock().unwrap().is_empty());
}

#[test]
fn test_deregister_disposes_and_fires_removed() {
	let (service, factory) = service();
	service.create_logger("network".into(), LoggerOptions::default()).unwrap();
	let (events, _subscription) = collect_loggers_events(&service);

	service.deregister_logger("network".into());

	let events = events.lock().unwrap();
	assert_eq!(events.len(), 1);
	assert_eq!(events[0].removed.len(), 1);
	assert!(events[0].added.is_empty());
	assert!(service.get_registered_loggers().is_empty());

	let created = factory.created.lock().unwrap();
	assert_eq!(created[0].disposals.load(Ordering::SeqCst), 1);
}

#[test]
fn test_deregister_unknown_is_a_silent_no_op() {
	let (service, _factory) = service();
	let (events, _subscription) = collect_loggers_events(&service);

	service.deregister_logger("never-registered".into());

	assert!(events.lock().unwrap().is_empty());
	assert!(service.get_registered_loggers().is_empty());
}

#[test]
fn test_default_level_skips_overridden_loggers() {
	let (service, _factory) = service();

	let a = service.create_logger("a".into(), LoggerOptions::default()).unwrap();
	let b = service.create_logger("b".into(), LoggerOptions::default()).unwrap();
	service.set_level("b".into(), LogLevel::Error);

	let (events, _subscription) = collect_level_events(&service);
	service.set_default_level(LogLevel::Debug);

	assert_eq!(a.level(), LogLevel::Debug);
	assert_eq!(b.level(), LogLevel::Error);
	assert_eq!(service.get_level("a".into()), LogLevel::Debug);
	assert_eq!(service.get_level("b".into()), LogLevel::Error);
	assert_eq!(*events.lock().unwrap(), vec![LogLevelChange::Default(LogLevel::Debug)]);
}

#[test]
fn test_override_collapses_when_default_catches_up() {
	let (service, _factory) = service();

	service.create_logger("b".into(), LoggerOptions::default()).unwrap();
	service.set_level("b".into(), LogLevel::Debug);
	assert_eq!(
		service.get_registered_loggers()[0].level,
		Some(LogLevel::Debug)
	);

	service.set_default_level(LogLevel::Debug);

	// The override now equals the default and collapses to "inherit",
	// while the effective level stays Debug
	assert_eq!(service.get_registered_loggers()[0].level, None);
	assert_eq!(service.get_level("b".into()), LogLevel::Debug);

	// A later default change therefore affects it again
	service.set_default_level(LogLevel::Warn);
	assert_eq!(service.get_level("b".into()), LogLevel::Warn);
}

#[test]
fn test_scoped_level_equal_to_default_stores_no_override() {
	let (service, _factory) = service();

	service.create_logger("a".into(), LoggerOptions::default()).unwrap();
	let (events, _subscription) = collect_level_events(&service);

	service.set_level("a".into(), LogLevel::Info);

	// Fires (the request differed from the stored explicit level), but
	// stores "inherit" since it equals the default
	assert_eq!(events.lock().unwrap().len(), 1);
	assert_eq!(service.get_registered_loggers()[0].level, None);
}

#[test]
fn test_scoped_level_on_unknown_identity_is_silent() {
	let (service, _factory) = service();
	let (events, _subscription) = collect_level_events(&service);

	service.set_level("ghost".into(), LogLevel::Trace);

	assert!(events.lock().unwrap().is_empty());
}

#[test]
fn test_repeated_scoped_level_does_not_refire() {
	let (service, _factory) = service();
	service.create_logger("a".into(), LoggerOptions::default()).unwrap();
	let (events, _subscription) = collect_level_events(&service);

	service.set_level("a".into(), LogLevel::Error);
	service.set_level("a".into(), LogLevel::Error);

	let events = events.lock().unwrap();
	assert_eq!(events.len(), 1);
	assert_eq!(
		events[0],
		LogLevelChange::Logger(
			LogResource::new(format!("{}/a.log", LOGS_HOME)),
			LogLevel::Error
		)
	);
}

#[test]
fn test_visibility_fires_only_on_change() {
	let (service, _factory) = service();
	service.create_logger("a".into(), LoggerOptions::default()).unwrap();
	let (events, _subscription) = collect_visibility_events(&service);

	service.set_visibility("a".into(), true);
	assert!(events.lock().unwrap().is_empty());

	service.set_visibility("a".into(), false);
	service.set_visibility("ghost".into(), false);

	let events = events.lock().unwrap();
	assert_eq!(events.len(), 1);
	assert!(!events[0].visible);
	assert!(events[0].resource.hidden);
}

#[test]
fn test_registered_loggers_keep_insertion_order() {
	let (service, _factory) = service();

	for id in ["c", "a", "b"] {
		service.create_logger(id.into(), LoggerOptions::default()).unwrap();
	}

	let names: Vec<String> =
		service.get_registered_loggers().iter().map(|r| r.resource.name()).collect();
	assert_eq!(names, vec!["c", "a", "b"]);
}

#[test]
fn test_notifications_observe_the_settled_state() {
	let (service, _factory) = service();
	let observer = Arc::clone(&service);
	let seen = Arc::new(Mutex::new(Vec::new()));
	let sink = Arc::clone(&seen);

	let _subscription = service.on_did_change_loggers(Box::new(move |_| {
		// The mutation happened-before this notification
		sink.lock().unwrap().push(observer.get_registered_loggers().len());
	}));

	service.register_logger(LoggerResource::new(
		LogResource::new(format!("{}/db.log", LOGS_HOME)),
		"db",
	));
	service.deregister_logger(LoggerIdentity::from("db"));

	assert_eq!(*seen.lock().unwrap(), vec![1, 0]);
}

#[test]
fn test_factory_failure_is_fatal_to_the_call_only() {
	let service = LoggerService::new(LOGS_HOME, LogLevel::Info, Box::new(FailingFactory));

	let error = service
		.create_logger("broken".into(), LoggerOptions::default())
		.err()
		.unwrap();
	assert_eq!(error.code(), "LOG_002");

	// Nothing was stored; the service remains usable
	assert!(service.get_registered_loggers().is_empty());
	assert!(service.get_logger("broken".into()).is_none());
}

#[test]
fn test_dispose_clears_and_is_idempotent() {
	let (service, factory) = service();
	service.create_logger("a".into(), LoggerOptions::default()).unwrap();
	service.create_logger("b".into(), LoggerOptions::default()).unwrap();

	service.dispose();
	service.dispose();

	assert!(service.get_registered_loggers().is_empty());
	let created = factory.created.lock().unwrap();
	for logger in created.iter() {
		assert_eq!(logger.disposals.load(Ordering::SeqCst), 1);
	}
}

#[test]
fn test_builder_wires_the_console_factory() {
	let service = LogServiceBuilder::new(LOGS_HOME)
		.default_level(LogLevel::Warn)
		.with_console(false)
		.build();

	let logger = service.create_logger("boot".into(), LoggerOptions::default()).unwrap();
	assert_eq!(logger.level(), LogLevel::Warn);
}
