// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Log message arguments and formatting

use std::fmt::Debug;

use serde::Serialize;

/// An error captured at the call site, detached from its lifetime.
///
/// `trace` holds the rendered source chain — the diagnostic detail that is
/// only included when formatting verbosely.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedError {
	pub message: String,
	pub trace: Option<String>,
}

impl CapturedError {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			trace: None,
		}
	}

	/// Capture an error together with its source chain.
	pub fn capture(error: &(dyn std::error::Error + '_)) -> Self {
		let message = error.to_string();
		let mut trace = String::new();
		let mut source = error.source();
		while let Some(cause) = source {
			trace.push_str("\nCaused by: ");
			trace.push_str(&cause.to_string());
			source = cause.source();
		}
		Self {
			message,
			trace: if trace.is_empty() {
				None
			} else {
				Some(trace)
			},
		}
	}

	fn render(&self, verbose: bool) -> String {
		match (&self.trace, verbose) {
			(Some(trace), true) => format!("{}{}", self.message, trace),
			_ => self.message.clone(),
		}
	}
}

/// One extra argument to a leveled write.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageArg {
	Text(String),
	Error(CapturedError),
	Value(serde_json::Value),
}

impl MessageArg {
	pub fn text(value: impl Into<String>) -> Self {
		MessageArg::Text(value.into())
	}

	pub fn error(error: &(dyn std::error::Error + '_)) -> Self {
		MessageArg::Error(CapturedError::capture(error))
	}

	/// Capture an arbitrary value as JSON, best-effort. On serialization
	/// failure the `Debug` rendering is emitted verbatim — logging never
	/// fails because of its payload.
	pub fn value<T: Serialize + Debug>(value: &T) -> Self {
		match serde_json::to_value(value) {
			Ok(json) => MessageArg::Value(json),
			Err(_) => MessageArg::Text(format!("{:?}", value)),
		}
	}

	fn render(&self, verbose: bool) -> String {
		match self {
			MessageArg::Text(text) => text.clone(),
			MessageArg::Error(error) => error.render(verbose),
			MessageArg::Value(json) => json.to_string(),
		}
	}
}

impl From<&str> for MessageArg {
	fn from(value: &str) -> Self {
		MessageArg::Text(value.to_string())
	}
}

impl From<String> for MessageArg {
	fn from(value: String) -> Self {
		MessageArg::Text(value)
	}
}

/// The message position of an `error` write: either plain text or an error
/// value rendered the same way error arguments are.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorMessage {
	Text(String),
	Error(CapturedError),
}

impl ErrorMessage {
	pub fn error(error: &(dyn std::error::Error + '_)) -> Self {
		ErrorMessage::Error(CapturedError::capture(error))
	}

	/// Extract the text a sink should receive.
	pub fn to_message(&self, verbose: bool) -> String {
		match self {
			ErrorMessage::Text(text) => text.clone(),
			ErrorMessage::Error(error) => error.render(verbose),
		}
	}

	pub fn to_arg(&self) -> MessageArg {
		match self {
			ErrorMessage::Text(text) => MessageArg::Text(text.clone()),
			ErrorMessage::Error(error) => MessageArg::Error(error.clone()),
		}
	}
}

impl From<&str> for ErrorMessage {
	fn from(value: &str) -> Self {
		ErrorMessage::Text(value.to_string())
	}
}

impl From<String> for ErrorMessage {
	fn from(value: String) -> Self {
		ErrorMessage::Text(value)
	}
}

/// Space-join the parts of a leveled write into a single line. Errors render
/// as their message (source chain appended when `verbose`), JSON values
/// render compactly.
pub fn format_message(parts: &[MessageArg], verbose: bool) -> String {
	let mut out = String::new();
	for part in parts {
		if !out.is_empty() {
			out.push(' ');
		}
		out.push_str(&part.render(verbose));
	}
	out
}
