//! Capability checks on top of the permission store.

use crate::{perm_adapter::PermAdapter, prelude::*};

/// Require that `user_id` holds `code`.
///
/// Store failures propagate unchanged; a missing capability is
/// [`Error::PermissionDenied`].
pub async fn require_permission<A>(adapter: &A, user_id: UserId, code: &str) -> ClResult<()>
where
	A: PermAdapter + ?Sized,
{
	let perms = adapter.get_all_for_user(user_id).await?;
	if perms.include(code) {
		Ok(())
	} else {
		debug!("user {} lacks permission {}", user_id, code);
		Err(Error::PermissionDenied)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		config::AdapterConfig,
		memory::MemoryPermAdapter,
		perm_adapter::PermGrantAdapter,
	};
	use std::{sync::Arc, time::Duration};

	#[tokio::test]
	async fn test_require_permission() {
		let adapter = MemoryPermAdapter::new(AdapterConfig::default())
			.with_catalog(["movies:read", "movies:write"]);
		adapter.add_for_user(UserId(1), &["movies:read"]).await.unwrap();

		let adapter: Arc<dyn PermAdapter> = Arc::new(adapter);
		assert!(require_permission(adapter.as_ref(), UserId(1), "movies:read").await.is_ok());

		let err = require_permission(adapter.as_ref(), UserId(1), "movies:write").await.unwrap_err();
		assert!(matches!(err, Error::PermissionDenied));

		let err = require_permission(adapter.as_ref(), UserId(2), "movies:read").await.unwrap_err();
		assert!(matches!(err, Error::PermissionDenied));
	}

	#[tokio::test(start_paused = true)]
	async fn test_store_error_is_not_turned_into_denial() {
		let config = AdapterConfig::default().with_op_timeout(Duration::from_millis(10));
		let adapter = MemoryPermAdapter::new(config).with_latency(Duration::from_secs(1));

		let err = require_permission(&adapter, UserId(1), "movies:read").await.unwrap_err();
		assert!(err.is_timeout());
	}
}

// vim: ts=4
