//! Request-scoped cancellation for long traversals.
//!
//! Traversals poll a [`CancellationToken`] once per settled station and
//! fail with [`PathError::Cancelled`] once it is cancelled.

use tokio_util::sync::CancellationToken;

use super::PathError;

pub(super) fn check(cancel: &CancellationToken) -> Result<(), PathError> {
    if cancel.is_cancelled() {
        Err(PathError::Cancelled)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let token = CancellationToken::new();
        let clone = token.clone();
        assert!(check(&clone).is_ok());

        token.cancel();
        assert_eq!(check(&clone), Err(PathError::Cancelled));
    }

    #[test]
    fn drop_guard_cancels() {
        let token = CancellationToken::new();
        {
            let _guard = token.clone().drop_guard();
            assert!(check(&token).is_ok());
        }
        assert_eq!(check(&token), Err(PathError::Cancelled));
    }
}
