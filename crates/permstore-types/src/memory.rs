//! In-memory permission store (for testing)
//!
//! Follows the same contract as the database adapters: unknown codes are
//! skipped on grant, re-granting a held code is a constraint violation, and
//! an unknown user reads as an empty set. An optional artificial latency is
//! applied inside the deadline so timeouts can be exercised without a
//! database.

use async_trait::async_trait;
use std::{collections::HashMap, time::Duration};
use tokio::sync::RwLock;

use crate::{
	config::AdapterConfig,
	deadline::{with_deadline, Op},
	perm_adapter::{PermAdapter, PermGrantAdapter, PermissionSet},
	prelude::*,
};

#[derive(Debug, Default)]
pub struct MemoryPermAdapter {
	catalog: Vec<Box<str>>,
	grants: RwLock<HashMap<UserId, Vec<Box<str>>>>,
	latency: Option<Duration>,
	config: AdapterConfig,
}

impl MemoryPermAdapter {
	pub fn new(config: AdapterConfig) -> Self {
		Self { config, ..Self::default() }
	}

	/// Provision the permission catalog
	pub fn with_catalog<I, S>(mut self, codes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<Box<str>>,
	{
		for code in codes {
			let code = code.into();
			if !self.catalog.contains(&code) {
				self.catalog.push(code);
			}
		}
		self
	}

	/// Delay every operation by `latency`, simulating a slow backend
	pub fn with_latency(mut self, latency: Duration) -> Self {
		self.latency = Some(latency);
		self
	}

	async fn simulate_latency(&self) {
		if let Some(latency) = self.latency {
			tokio::time::sleep(latency).await;
		}
	}
}

#[async_trait]
impl PermAdapter for MemoryPermAdapter {
	async fn get_all_for_user(&self, user_id: UserId) -> ClResult<PermissionSet> {
		with_deadline(Op::Read, self.config.op_timeout(), async {
			self.simulate_latency().await;
			let grants = self.grants.read().await;
			let codes = grants.get(&user_id).cloned().unwrap_or_default();
			Ok(PermissionSet::from(codes))
		})
		.await
	}
}

#[async_trait]
impl PermGrantAdapter for MemoryPermAdapter {
	async fn add_for_user(&self, user_id: UserId, codes: &[&str]) -> ClResult<()> {
		if codes.is_empty() {
			return Ok(());
		}

		with_deadline(Op::Grant, self.config.op_timeout(), async {
			self.simulate_latency().await;

			// Catalog order, each matching code once, like an insert-from-select
			let matched: Vec<&str> =
				self.catalog.iter().map(|c| &**c).filter(|c| codes.contains(c)).collect();

			let mut grants = self.grants.write().await;
			let held = grants.entry(user_id).or_default();
			if let Some(dup) = matched.iter().find(|c| held.iter().any(|h| &**h == **c)) {
				return Err(Error::Mutation(Cause::backend(format!(
					"duplicate grant of {} to user {}",
					dup, user_id
				))));
			}
			held.extend(matched.into_iter().map(Box::from));
			Ok(())
		})
		.await
	}
}


// vim: ts=4
