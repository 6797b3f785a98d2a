//! Handles signals for graceful shutdown.
//!
//! The HTTP service stops accepting connections on Ctrl-C everywhere and on
//! `SIGTERM` on Unix-like systems, letting in-flight requests finish.

/// Resolves when the process is asked to stop.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(
                target: "learnavia::signals",
                error = %e,
                "Failed to listen for Ctrl-C"
            );
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!(
                    target: "learnavia::signals",
                    error = %e,
                    "Failed to install SIGTERM handler"
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!(target: "learnavia::signals", "Shutdown signal received");
}
