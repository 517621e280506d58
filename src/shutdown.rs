//! Process signals that request cooperative cancellation.

use log::warn;

/// Resolves on Ctrl-C, and on SIGTERM or SIGQUIT where those exist.
///
/// A handler that cannot be installed never resolves, so the remaining ones
/// still apply.
pub async fn shutdown_signal() {
    let interrupt = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!("Cannot listen for Ctrl-C: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let listen = |kind: SignalKind| async move {
            match signal(kind) {
                Ok(mut stream) => {
                    stream.recv().await;
                }
                Err(err) => {
                    warn!("Cannot listen for signal {kind:?}: {err}");
                    std::future::pending::<()>().await;
                }
            }
        };

        tokio::select! {
            _ = interrupt => {}
            _ = listen(SignalKind::terminate()) => {}
            _ = listen(SignalKind::quit()) => {}
        }
    }

    #[cfg(not(unix))]
    interrupt.await;
}
