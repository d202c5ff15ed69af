//! PostgreSQL implementation of the permission store.
//!
//! Same contract as the SQLite adapter. Grants bind the requested codes as a
//! single `text[]` parameter, so the statement text does not depend on the
//! number of codes.

use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::{PgPool, Row};

use permstore::{
	config::AdapterConfig,
	deadline::{with_deadline, Op},
	perm_adapter::{PermAdapter, PermGrantAdapter, PermissionSet},
	prelude::*,
};

mod utils;

use crate::utils::*;

const SELECT_USER_CODES: &str = "SELECT p.code AS code
	FROM permissions p
	INNER JOIN users_permissions up ON up.permission_id = p.id
	INNER JOIN users u ON up.user_id = u.id
	WHERE u.id = $1";

const INSERT_USER_CODES: &str = "INSERT INTO users_permissions (user_id, permission_id)
	SELECT $1, p.id FROM permissions p WHERE p.code = ANY($2)";

#[derive(Debug, Clone)]
pub struct PermAdapterPostgres {
	db: PgPool,
	config: AdapterConfig,
}

impl PermAdapterPostgres {
	pub fn new(db: PgPool, config: AdapterConfig) -> Self {
		Self { db, config }
	}

	async fn read_codes(&self, user_id: UserId) -> ClResult<PermissionSet> {
		let mut rows = sqlx::query(SELECT_USER_CODES).bind(user_id.0).fetch(&self.db);

		let mut codes: Vec<String> = Vec::new();
		loop {
			let row = match rows.try_next().await {
				Ok(Some(row)) => row,
				Ok(None) => break,
				Err(err) => {
					inspect(&err);
					return Err(Error::from_stream(err, codes.len()));
				}
			};
			let code: Option<String> = row
				.try_get("code")
				.inspect_err(inspect)
				.map_err(|err| Error::Query(Cause::backend(err)))?;
			codes.push(require_code(code)?);
		}

		debug!("user {} holds {} permissions", user_id, codes.len());
		Ok(PermissionSet::from(codes))
	}

	async fn insert_codes(&self, user_id: UserId, codes: &[&str]) -> ClResult<()> {
		let codes: Vec<String> = codes.iter().map(|code| (*code).to_owned()).collect();
		let res = sqlx::query(INSERT_USER_CODES)
			.bind(user_id.0)
			.bind(&codes)
			.execute(&self.db)
			.await
			.inspect_err(inspect)
			.map_err(|err| Error::Mutation(Cause::backend(err)))?;

		debug!(
			"granted {} of {} requested permissions to user {}",
			res.rows_affected(),
			codes.len(),
			user_id
		);
		Ok(())
	}
}

#[async_trait]
impl PermAdapter for PermAdapterPostgres {
	async fn get_all_for_user(&self, user_id: UserId) -> ClResult<PermissionSet> {
		with_deadline(Op::Read, self.config.op_timeout(), self.read_codes(user_id)).await
	}
}

#[async_trait]
impl PermGrantAdapter for PermAdapterPostgres {
	/// Empty `codes` returns immediately without a round trip.
	async fn add_for_user(&self, user_id: UserId, codes: &[&str]) -> ClResult<()> {
		if codes.is_empty() {
			return Ok(());
		}
		with_deadline(Op::Grant, self.config.op_timeout(), self.insert_codes(user_id, codes)).await
	}
}

// vim: ts=4
