// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! The loghub logger registry service: creates, registers and manages named
//! loggers, tracks default and per-logger levels and visibility, and
//! announces every change synchronously.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use builder::LogServiceBuilder;
pub use factory::{ConsoleLoggerFactory, LoggerFactory};
pub use null::NullLogService;
pub use service::{
	DidChangeLoggersEvent, LogLevelChange, LogService, LoggerService, VisibilityChange,
};

mod builder;
mod factory;
mod null;
mod service;
