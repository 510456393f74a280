// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Concrete and composite loggers for the loghub logging service.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use adapter::{AdapterFn, AdapterLogger};
pub use buffer::BufferLogger;
pub use console::{
	ConsoleLogger, ConsoleMainLogger, ConsoleMainSink, ConsoleSink, console_logger,
	console_main_logger,
};
pub use multiplex::MultiplexLogger;
pub use null::NullLogger;

mod adapter;
mod buffer;
mod console;
mod multiplex;
mod null;
