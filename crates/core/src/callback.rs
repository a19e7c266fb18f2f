//! Completion callbacks
//!
//! Every facade operation is a future. Callers that prefer a callback can
//! attach one; the outcome, error included, goes to the callback and is
//! still returned by the future.

use std::future::Future;

use ctct_domain::Result;
use futures::future::{FutureExt, Inspect};

/// Attach a completion callback to an SDK future.
pub trait CompletionExt<T>: Future<Output = Result<T>> + Sized {
    /// Invoke `callback` with a reference to the outcome, then yield the
    /// outcome unchanged.
    fn with_callback<F>(self, callback: F) -> Inspect<Self, F>
    where
        F: FnOnce(&Result<T>),
    {
        self.inspect(callback)
    }
}

impl<T, Fut> CompletionExt<T> for Fut where Fut: Future<Output = Result<T>> {}

/// Await `future`, handing its outcome to `callback` when one is given.
pub async fn deliver<T, Fut, F>(future: Fut, callback: Option<F>) -> Result<T>
where
    Fut: Future<Output = Result<T>>,
    F: FnOnce(&Result<T>),
{
    let outcome = future.await;
    if let Some(callback) = callback {
        callback(&outcome);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use ctct_domain::CtctError;

    use super::*;

    #[tokio::test]
    async fn success_reaches_callback_and_caller() {
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);

        let outcome = async { Ok::<_, CtctError>(7) }
            .with_callback(move |result| *sink.lock().unwrap() = Some(result.clone()))
            .await;

        assert_eq!(outcome, Ok(7));
        assert_eq!(*seen.lock().unwrap(), Some(Ok(7)));
    }

    #[tokio::test]
    async fn errors_reach_callback_and_caller() {
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        let failing = async { Err::<u8, _>(CtctError::Protocol("bad cursor".into())) };

        let outcome = deliver(failing, Some(move |result: &Result<u8>| *sink.lock().unwrap() = Some(result.clone()))).await;

        assert!(matches!(outcome, Err(CtctError::Protocol(_))));
        assert!(matches!(*seen.lock().unwrap(), Some(Err(CtctError::Protocol(_)))));
    }

    #[tokio::test]
    async fn missing_callback_is_fine() {
        let outcome = deliver(async { Ok::<_, CtctError>("done") }, None::<fn(&Result<&str>)>).await;
        assert_eq!(outcome, Ok("done"));
    }
}
