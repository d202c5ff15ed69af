//! Utility functions for database operations

use permstore::prelude::*;

/// Log database errors
pub(crate) fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

/// Reject a NULL capability code
pub(crate) fn require_code(code: Option<String>) -> ClResult<String> {
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
