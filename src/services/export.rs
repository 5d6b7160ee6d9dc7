//! Share-card export service
//!
//! Background worker that rasterizes captured cards and writes PNG files.
//! Requests arrive on an unbounded channel; each one runs on the blocking
//! pool and reports back once. There is no cancellation, timeout or retry.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::export::{self, ExportError, Rasterizer, RenderTarget};

/// Export request types
#[derive(Debug, Clone)]
pub enum ExportRequest {
    /// Rasterize `target` and save it as `filename` in the download directory
    SaveCard {
        target: Option<RenderTarget>,
        filename: String,
    },
}

/// Export response types
#[derive(Debug)]
pub enum ExportResponse {
    Saved { path: PathBuf },
    Failed { filename: String, error: ExportError },
}

/// Spawn the export worker
///
/// Must be called from within a tokio runtime.
pub fn spawn_export_service(
    rasterizer: Arc<dyn Rasterizer>,
    download_dir: PathBuf,
) -> (
    mpsc::UnboundedSender<ExportRequest>,
    mpsc::UnboundedReceiver<ExportResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ExportRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ExportResponse>();

    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            let ExportRequest::SaveCard { target, filename } = request;
            let rasterizer = Arc::clone(&rasterizer);
            let dir = download_dir.clone();
            let response_tx = response_tx.clone();

            tokio::spawn(async move {
                let name = filename.clone();
                let result = tokio::task::spawn_blocking(move || {
                    export::export_card(rasterizer.as_ref(), target.as_ref(), &name, &dir)
                })
                .await
                .unwrap_or_else(|e| Err(ExportError::Worker(e.to_string())));

                let response = match result {
                    Ok(path) => {
                        tracing::info!("Saved share card to {}", path.display());
                        ExportResponse::Saved { path }
                    }
                    Err(error) => {
                        tracing::warn!("Share card export of {} failed: {}", filename, error);
                        ExportResponse::Failed { filename, error }
                    }
                };

                // Receiver gone means the app is shutting down
                let _ = response_tx.send(response);
            });
        }
    });

    (request_tx, response_rx)
}
