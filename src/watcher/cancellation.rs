use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures_channel::oneshot;

/// Creates a connected handle/signal pair.
///
/// The signal resolves once [`CancellationHandle::cancel`] is called or the
/// handle is dropped.
pub fn cancellation() -> (CancellationHandle, CancellationSignal) {
    let (sender, receiver) = oneshot::channel();
    (
        CancellationHandle { sender },
        CancellationSignal { receiver },
    )
}

#[derive(Debug)]
pub struct CancellationHandle {
    sender: oneshot::Sender<()>,
}

impl CancellationHandle {
    pub fn cancel(self) {
        // The loop may already be gone, nothing left to stop then
        let _ = self.sender.send(());
    }
}

#[derive(Debug)]
pub struct CancellationSignal {
    receiver: oneshot::Receiver<()>,
}

impl Future for CancellationSignal {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        // A dropped handle resolves with `Canceled`, which means the same thing here
        self.receiver.poll_unpin(cx).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{Either, select};
    use std::future::ready;

    #[test]
    fn test_signal_resolves_after_cancel() {
        let (handle, signal) = cancellation();
        handle.cancel();

        block_on(signal);
    }

    #[test]
    fn test_signal_resolves_when_handle_dropped() {
        let (handle, signal) = cancellation();
        drop(handle);

        block_on(signal);
    }

    #[test]
    fn test_signal_pending_while_handle_alive() {
        let (_handle, mut signal) = cancellation();

        let raced = block_on(select(&mut signal, ready(())));

        assert!(matches!(raced, Either::Right(_)));
    }

    #[test]
    fn test_cancel_after_signal_dropped_is_harmless() {
        let (handle, signal) = cancellation();
        drop(signal);

        handle.cancel();
    }
}
