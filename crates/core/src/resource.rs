// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Logger identity, registry metadata and the create-logger option surface

use std::{
	fmt,
	path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::level::LogLevel;

/// Canonical identity of a logger: a path rooted under the service's
/// logs-home directory. Lookup and equality are on this path.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogResource {
	path: PathBuf,
}

impl LogResource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
		}
	}

	/// Deterministic mapping of a bare string id into the logs home.
	pub fn in_home(logs_home: &Path, id: &str) -> Self {
		Self::new(logs_home.join(format!("{}.log", id)))
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Human name derived from the path, used when no explicit name is
	/// registered.
	pub fn name(&self) -> String {
		self.path
			.file_stem()
			.map(|stem| stem.to_string_lossy().into_owned())
			.unwrap_or_else(|| self.path.to_string_lossy().into_owned())
	}

	/// Stable id synthesized from the canonical path.
	pub fn stable_id(&self) -> String {
		format!("{:016x}", xxh3_64(self.path.to_string_lossy().as_bytes()))
	}
}

impl fmt::Display for LogResource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "log:///{}", self.path.to_string_lossy().trim_start_matches('/'))
	}
}

/// Either addressing mode accepted by the service: a canonical resource or
/// a bare string id. Both resolve to the same canonical form.
#[derive(Clone, Debug)]
pub enum LoggerIdentity {
	Resource(LogResource),
	Id(String),
}

impl LoggerIdentity {
	pub fn resolve(&self, logs_home: &Path) -> LogResource {
		match self {
			LoggerIdentity::Resource(resource) => resource.clone(),
			LoggerIdentity::Id(id) => LogResource::in_home(logs_home, id),
		}
	}
}

impl From<LogResource> for LoggerIdentity {
	fn from(resource: LogResource) -> Self {
		LoggerIdentity::Resource(resource)
	}
}

impl From<&LogResource> for LoggerIdentity {
	fn from(resource: &LogResource) -> Self {
		LoggerIdentity::Resource(resource.clone())
	}
}

impl From<&str> for LoggerIdentity {
	fn from(id: &str) -> Self {
		LoggerIdentity::Id(id.to_string())
	}
}

impl From<String> for LoggerIdentity {
	fn from(id: String) -> Self {
		LoggerIdentity::Id(id)
	}
}

/// UI clustering group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerGroup {
	pub id: String,
	pub name: String,
}

/// Registered metadata of a logger. An entry may exist without a live
/// logger instance ("announced but not instantiated").
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggerResource {
	pub resource: LogResource,
	pub id: String,
	pub name: Option<String>,
	/// Explicit per-logger level. `None` inherits the service default.
	pub level: Option<LogLevel>,
	pub hidden: bool,
	pub when: Option<String>,
	pub extension_id: Option<String>,
	pub group: Option<LoggerGroup>,
}

impl LoggerResource {
	pub fn new(resource: LogResource, id: impl Into<String>) -> Self {
		Self {
			resource,
			id: id.into(),
			name: None,
			level: None,
			hidden: false,
			when: None,
			extension_id: None,
			group: None,
		}
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub fn with_level(mut self, level: LogLevel) -> Self {
		self.level = Some(level);
		self
	}

	pub fn with_hidden(mut self, hidden: bool) -> Self {
		self.hidden = hidden;
		self
	}

	pub fn with_group(mut self, group: LoggerGroup) -> Self {
		self.group = Some(group);
		self
	}
}

/// Initial level requested at creation: a concrete level, or the `always`
/// sentinel which maps to `Trace`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelSetting {
	Always,
	#[serde(untagged)]
	Level(LogLevel),
}

impl LevelSetting {
	pub fn to_level(self) -> LogLevel {
		match self {
			LevelSetting::Always => LogLevel::Trace,
			LevelSetting::Level(level) => level,
		}
	}
}

/// Options accepted by `create_logger`/`register_logger`.
///
/// `donot_rotate` and `donot_use_formatters` are hints for concrete sinks;
/// the core carries but never consumes them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggerOptions {
	pub id: Option<String>,
	pub name: Option<String>,
	pub donot_rotate: bool,
	pub donot_use_formatters: bool,
	pub log_level: Option<LevelSetting>,
	pub hidden: bool,
	pub when: Option<String>,
	pub extension_id: Option<String>,
	pub group: Option<LoggerGroup>,
}
