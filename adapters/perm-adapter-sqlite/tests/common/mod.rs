//! Test adapter builders and helpers
//!
//! The permission store does not own its schema, so the tests create the
//! `users`, `permissions` and `users_permissions` relations themselves on a
//! file-backed database inside a `TempDir`. The TempDir is returned
//! alongside the adapter so cleanup happens when it is dropped.

#![allow(dead_code)]

use std::time::Duration;

use permstore::config::AdapterConfig;
use permstore_adapter_sqlite::PermAdapterSqlite;
use sqlx::sqlite::{self, SqlitePool};
use tempfile::TempDir;

pub const CATALOG: &[&str] = &["movies:read", "movies:write", "a", "b"];

/// Initialize a tracing subscriber for test debugging
pub fn setup_test_logging() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing::Level::DEBUG)
		.try_init();
}

/// Open a pool on a fresh database file
pub async fn create_test_pool(dir: &TempDir) -> SqlitePool {
	let opts = sqlite::SqliteConnectOptions::new()
		.filename(dir.path().join("perm.db"))
		.create_if_missing(true)
		.foreign_keys(true)
		.journal_mode(sqlite::SqliteJournalMode::Delete)
		.busy_timeout(Duration::from_secs(10));
	sqlite::SqlitePoolOptions::new()
		.max_connections(5)
		.connect_with(opts)
		.await
		.expect("Failed to open test database")
}

/// Create the external schema
pub async fn init_schema(db: &SqlitePool) {
	for stmt in [
		"CREATE TABLE IF NOT EXISTS users (
			id integer NOT NULL,
			name text NOT NULL,
			PRIMARY KEY(id)
		)",
		"CREATE TABLE IF NOT EXISTS permissions (
			id integer NOT NULL,
			code text NOT NULL UNIQUE,
			PRIMARY KEY(id)
		)",
		"CREATE TABLE IF NOT EXISTS users_permissions (
			user_id integer NOT NULL REFERENCES users(id) ON DELETE CASCADE,
			permission_id integer NOT NULL REFERENCES permissions(id) ON DELETE CASCADE,
			PRIMARY KEY(user_id, permission_id)
		)",
	] {
		sqlx::query(stmt).execute(db).await.expect("Failed to create schema");
	}
}

pub async fn seed_catalog(db: &SqlitePool, codes: &[&str]) {
	for code in codes {
		sqlx::query("INSERT INTO permissions (code) VALUES (?)")
			.bind(*code)
			.execute(db)
			.await
			.expect("Failed to seed permission");
	}
}

pub async fn seed_user(db: &SqlitePool, id: i64) {
	sqlx::query("INSERT INTO users (id, name) VALUES (?, ?)")
		.bind(id)
		.bind(format!("user{}", id))
		.execute(db)
		.await
		.expect("Failed to seed user");
}

/// Adapter over a seeded database: users 1..=3 and the [`CATALOG`] codes
pub async fn create_test_adapter_with(
	config: AdapterConfig,
) -> (PermAdapterSqlite, SqlitePool, TempDir) {
	let tmp_dir = TempDir::new().expect("Failed to create temp directory");
	let db = create_test_pool(&tmp_dir).await;
	init_schema(&db).await;
	seed_catalog(&db, CATALOG).await;
	for id in 1..=3 {
		seed_user(&db, id).await;
	}

	let adapter = PermAdapterSqlite::new(db.clone(), config);
	(adapter, db, tmp_dir)
}

pub async fn create_test_adapter() -> (PermAdapterSqlite, SqlitePool, TempDir) {
	create_test_adapter_with(AdapterConfig::default()).await
}

// vim: ts=4
