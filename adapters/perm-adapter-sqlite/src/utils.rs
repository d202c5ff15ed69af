//! Utility functions for database operations

use permstore::prelude::*;

/// Log database errors
pub(crate) fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

/// Reject a NULL capability code.
///
/// SQLite decodes NULL text as `""`, which would read as a granted code, so
/// the column is decoded as an `Option` and NULL is a decode failure.
pub(crate) fn require_code(code: Option<Box<str>>) -> ClResult<Box<str>> {
	code.ok_or_else(|| {
		let err = sqlx::Error::ColumnDecode {
			index: "\"code\"".into(),
			source: Box::new(sqlx::error::UnexpectedNullError),
		};
		inspect(&err);
		Error::Query(Cause::backend(err))
	})
}


// vim: ts=4
