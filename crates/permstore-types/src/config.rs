//! Adapter configuration

use serde::Deserialize;
use std::{env, time::Duration};

/// Deadline applied to each operation unless configured otherwise
pub const DEFAULT_OP_TIMEOUT_MS: u64 = 3000;

pub const OP_TIMEOUT_ENV: &str = "PERMSTORE_OP_TIMEOUT_MS";

/// Adapter configuration options
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
	/// Deadline of a single read or grant, in milliseconds
	pub op_timeout_ms: u64,
}

impl Default for AdapterConfig {
	fn default() -> Self {
		Self { op_timeout_ms: DEFAULT_OP_TIMEOUT_MS }
	}
}

impl AdapterConfig {
	/// Build a config from the environment, falling back to defaults
	pub fn from_env() -> Self {
		let op_timeout_ms = env::var(OP_TIMEOUT_ENV)
			.ok()
			.and_then(|v| v.trim().parse().ok())
			.filter(|ms| *ms > 0)
			.unwrap_or(DEFAULT_OP_TIMEOUT_MS);
		Self { op_timeout_ms }
	}

	pub fn with_op_timeout(mut self, limit: Duration) -> Self {
		self.op_timeout_ms = u64::try_from(limit.as_millis()).unwrap_or(u64::MAX);
		self
	}

	/// Deadline of a single operation. Zero is not a usable deadline and
	/// falls back to [`DEFAULT_OP_TIMEOUT_MS`].
	pub fn op_timeout(&self) -> Duration {
		match self.op_timeout_ms {
			0 => Duration::from_millis(DEFAULT_OP_TIMEOUT_MS),
			ms => Duration::from_millis(ms),
		}
	}
}


// vim: ts=4
