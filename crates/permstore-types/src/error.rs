//! Error taxonomy of the permission store.
//!
//! Every database interaction fails with exactly one of the store variants,
//! carrying the underlying [`Cause`]. Nothing is retried or swallowed inside
//! the store; formatting for end users is left to the calling layer.

use std::{error::Error as StdError, fmt, time::Duration};

pub type ClResult<T> = std::result::Result<T, Error>;

pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Why a store operation failed
#[derive(Debug)]
pub enum Cause {
	/// The per-operation deadline elapsed before the round trip completed
	Timeout(Duration),
	/// Error reported by the backend (transport, decode, constraint, ...)
	Backend(BoxError),
}

impl Cause {
	pub fn backend<E>(err: E) -> Self
	where
		E: Into<BoxError>,
	{
		Cause::Backend(err.into())
	}
}

impl fmt::Display for Cause {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Cause::Timeout(limit) => write!(f, "timed out after {:?}", limit),
			Cause::Backend(err) => write!(f, "{}", err),
		}
	}
}

#[derive(Debug)]
pub enum Error {
	/// Read statement could not be executed, or a row could not be decoded
	Query(Cause),
	/// Result stream failed after some rows had already been read
	RowIteration(Cause),
	/// Grant statement failed (transport, constraint violation or timeout)
	Mutation(Cause),
	/// The user does not hold the required capability code
	PermissionDenied,
}

impl Error {
	pub fn cause(&self) -> Option<&Cause> {
		match self {
			Error::Query(cause) | Error::RowIteration(cause) | Error::Mutation(cause) => Some(cause),
			Error::PermissionDenied => None,
		}
	}

	pub fn is_timeout(&self) -> bool {
		matches!(self.cause(), Some(Cause::Timeout(_)))
	}

	/// Classify a failure of a read result stream.
	///
	/// Nothing read yet means the statement itself failed; otherwise the
	/// stream broke while materializing rows.
	pub fn from_stream<E>(err: E, rows_read: usize) -> Self
	where
		E: Into<BoxError>,
	{
		if rows_read == 0 {
			Error::Query(Cause::backend(err))
		} else {
			Error::RowIteration(Cause::backend(err))
		}
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::Query(cause) => write!(f, "permission query failed: {}", cause),
			Error::RowIteration(cause) => write!(f, "permission row iteration failed: {}", cause),
			Error::Mutation(cause) => write!(f, "permission grant failed: {}", cause),
			Error::PermissionDenied => write!(f, "permission denied"),
		}
	}
}

impl StdError for Error {
	fn source(&self) -> Option<&(dyn StdError + 'static)> {
		match self.cause() {
			Some(Cause::Backend(err)) => Some(err.as_ref()),
			_ => None,
		}
	}
}


// vim: ts=4
