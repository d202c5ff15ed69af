//! Adapter that resolves and grants capability codes for users.
//!
//! The read path ([`PermAdapter`]) is the minimal contract. Deployments that
//! also grant capabilities implement the [`PermGrantAdapter`] extension.

use async_trait::async_trait;
use serde::Serialize;
use std::fmt::Debug;

use crate::prelude::*;

/// Snapshot of the capability codes held by one user at query time.
///
/// Built fresh on every read and never mutated afterwards; changing stored
/// grants does not affect a set that was already returned.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PermissionSet(Vec<Box<str>>);

impl PermissionSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Exact, case-sensitive membership test
	pub fn include(&self, code: &str) -> bool {
		self.0.iter().any(|c| &**c == code)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> Iter<'_> {
		self.0.iter().map(as_str as fn(&Box<str>) -> &str)
	}

	pub fn as_slice(&self) -> &[Box<str>] {
		&self.0
	}
}

impl From<Vec<Box<str>>> for PermissionSet {
	fn from(codes: Vec<Box<str>>) -> Self {
		Self(codes)
	}
}

impl From<Vec<String>> for PermissionSet {
	fn from(codes: Vec<String>) -> Self {
		codes.into_iter().collect()
	}
}

impl<S: Into<Box<str>>> FromIterator<S> for PermissionSet {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self(iter.into_iter().map(Into::into).collect())
	}
}

/// Iterator over the codes of a [`PermissionSet`]
pub type Iter<'a> = std::iter::Map<std::slice::Iter<'a, Box<str>>, fn(&Box<str>) -> &str>;

fn as_str(code: &Box<str>) -> &str {
	code
}

impl<'a> IntoIterator for &'a PermissionSet {
	type Item = &'a str;
	type IntoIter = Iter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Read side of the permission store
#[async_trait]
pub trait PermAdapter: Debug + Send + Sync {
	/// Returns every capability code granted to `user_id`, in the order the
	/// backend produced them. An unknown user yields an empty set.
	///
	/// Fails with [`Error::Query`] if the statement cannot run or a row cannot
	/// be decoded, and with [`Error::RowIteration`] if the result stream
	/// breaks after rows were already read. A partial set is never returned.
	async fn get_all_for_user(&self, user_id: UserId) -> ClResult<PermissionSet>;
}

/// Write side of the permission store, an optional extension of [`PermAdapter`]
#[async_trait]
pub trait PermGrantAdapter: PermAdapter {
	/// Grants every code in `codes` that exists in the permission catalog.
	///
	/// Codes unknown to the catalog are skipped without error. An empty slice
	/// is a no-op. Re-granting a held code is not deduplicated: it fails with
	/// [`Error::Mutation`] when the schema enforces uniqueness.
	async fn add_for_user(&self, user_id: UserId, codes: &[&str]) -> ClResult<()>;
}


// vim: ts=4
