//! SQLite implementation of the permission store.
//!
//! The pool is supplied by the caller, who also owns the `users`,
//! `permissions` and `users_permissions` schema. The adapter only reads the
//! join and inserts grant rows.

use async_trait::async_trait;
use sqlx::SqlitePool;

use permstore::{
	config::AdapterConfig,
	deadline::{with_deadline, Op},
	perm_adapter::{PermAdapter, PermGrantAdapter, PermissionSet},
	prelude::*,
};

mod perm;
mod utils;

#[derive(Debug, Clone)]
pub struct PermAdapterSqlite {
	db: SqlitePool,
	config: AdapterConfig,
}

impl PermAdapterSqlite {
	pub fn new(db: SqlitePool, config: AdapterConfig) -> Self {
		Self { db, config }
	}
}

#[async_trait]
impl PermAdapter for PermAdapterSqlite {
	async fn get_all_for_user(&self, user_id: UserId) -> ClResult<PermissionSet> {
		with_deadline(Op::Read, self.config.op_timeout(), perm::get_all_for_user(&self.db, user_id))
			.await
	}
}

#[async_trait]
impl PermGrantAdapter for PermAdapterSqlite {
	/// Empty `codes` returns immediately without a round trip.
	async fn add_for_user(&self, user_id: UserId, codes: &[&str]) -> ClResult<()> {
		if codes.is_empty() {
			return Ok(());
		}
		with_deadline(Op::Grant, self.config.op_timeout(), perm::add_for_user(&self.db, user_id, codes))
			.await
	}
}

// vim: ts=4
