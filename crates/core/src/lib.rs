// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Core contracts of the loghub logging service: severity levels, message
//! formatting, the logger capability, registry identity and metadata, and
//! the synchronous change-notification channel.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use diagnostic::Diagnostic;
pub use error::{Error, Result};
pub use event::{Emitter, Subscription};
pub use level::LogLevel;
pub use logger::{FormattedLogger, FormattedSink, LevelCell, Logger, log_at};
pub use message::{CapturedError, ErrorMessage, MessageArg, format_message};
pub use resource::{
	LevelSetting, LogResource, LoggerGroup, LoggerIdentity, LoggerOptions, LoggerResource,
};

pub mod diagnostic;
mod error;
mod event;
mod level;
mod logger;
mod message;
mod resource;
