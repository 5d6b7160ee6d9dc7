//! Export Response Handler
//!
//! Handles results from the share-card export worker.

use quotui::services::ExportResponse;

use crate::App;

/// Handle export response from background service
///
/// Success and failure both end in a toast; failures were already logged by
/// the worker.
pub fn handle_export_response(app: &mut App, response: ExportResponse) {
    app.model.ui.exports_in_flight = app.model.ui.exports_in_flight.saturating_sub(1);

    match response {
        ExportResponse::Saved { path } => {
            app.model.show_toast(format!("Saved to {}", path.display()));
        }
        ExportResponse::Failed { filename, error } => {
            app.model.show_toast(format!("Error: {} not saved: {}", filename, error));
        }
    }
}
