//! Permission queries

use futures::TryStreamExt;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

use crate::utils::*;
use permstore::{perm_adapter::PermissionSet, prelude::*};

const SELECT_USER_CODES: &str = "SELECT p.code AS code
	FROM permissions p
	INNER JOIN users_permissions up ON up.permission_id = p.id
	INNER JOIN users u ON up.user_id = u.id
	WHERE u.id = ?";

/// Read all capability codes granted to a user, in engine order
pub(crate) async fn get_all_for_user(db: &SqlitePool, user_id: UserId) -> ClResult<PermissionSet> {
	let mut rows = sqlx::query(SELECT_USER_CODES).bind(user_id.0).fetch(db);

	let mut codes: Vec<Box<str>> = Vec::new();
	loop {
		let row = match rows.try_next().await {
			Ok(Some(row)) => row,
			Ok(None) => break,
			Err(err) => {
				inspect(&err);
				return Err(Error::from_stream(err, codes.len()));
			}
		};
		let code: Option<Box<str>> = row
			.try_get("code")
			.inspect_err(inspect)
			.map_err(|err| Error::Query(Cause::backend(err)))?;
		codes.push(require_code(code)?);
	}

	debug!("user {} holds {} permissions", user_id, codes.len());
	Ok(PermissionSet::from(codes))
}

/// Grant every catalog code in `codes` with one insert-from-select statement
pub(crate) async fn add_for_user(db: &SqlitePool, user_id: UserId, codes: &[&str]) -> ClResult<()> {
	let mut query = QueryBuilder::<Sqlite>::new(
		"INSERT INTO users_permissions (user_id, permission_id) SELECT ",
	);
	query.push_bind(user_id.0);
	query.push(", p.id FROM permissions p WHERE p.code IN (");
	{
		let mut list = query.separated(", ");
		for code in codes {
			list.push_bind(*code);
		}
	}
	query.push(")");

	let res = query
		.build()
		.execute(db)
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

// vim: ts=4
