//! Timer utilities shared by the data loaders.

use std::future::Future;

use futures::future::{select, Either};

/// Sleep without blocking the UI loop.
pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}

/// Race `fut` against a timer. `None` means the timer won.
pub async fn timeout<F: Future>(ms: u64, fut: F) -> Option<F::Output> {
    let fut = Box::pin(fut);
    let timer = Box::pin(sleep_ms(ms));
    match select(fut, timer).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(((), _)) => None,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    fn block_on<F: Future>(fut: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .expect("runtime")
            .block_on(fut)
    }

    #[test]
    fn ready_future_beats_timer() {
        assert_eq!(block_on(timeout(1_000, async { 7 })), Some(7));
    }

    #[test]
    fn stalled_future_times_out() {
        let stalled = futures::future::pending::<()>();
        assert_eq!(block_on(timeout(10, stalled)), None);
    }
}
