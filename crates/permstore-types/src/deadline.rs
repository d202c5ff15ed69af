//! Per-operation deadline.
//!
//! Every store operation runs under a fixed deadline measured from its own
//! start, independent of whatever deadline the caller imposes. When it
//! elapses the in-flight future is dropped, which releases the statement and
//! its pooled connection, and the operation fails with a timeout cause.

use std::{future::Future, time::Duration};

use tokio::time::timeout;

use crate::prelude::*;

/// Kind of store operation, selects the error variant a timeout maps to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
	Read,
	Grant,
}

impl Op {
	pub fn fail(self, cause: Cause) -> Error {
		match self {
			Op::Read => Error::Query(cause),
			Op::Grant => Error::Mutation(cause),
		}
	}

	fn name(self) -> &'static str {
		match self {
			Op::Read => "read",
			Op::Grant => "grant",
		}
	}
}

/// Run `fut` bounded by `limit`
pub async fn with_deadline<T, F>(op: Op, limit: Duration, fut: F) -> ClResult<T>
where
	F: Future<Output = ClResult<T>>,
{
	match timeout(limit, fut).await {
		Ok(res) => res,
		Err(_) => {
			warn!("permission {} timed out after {:?}", op.name(), limit);
			Err(op.fail(Cause::Timeout(limit)))
		}
	}
}


// vim: ts=4
