//! Card actions
//!
//! User actions on one quotation card:
//! - Copy text and source to the clipboard
//! - Open the share overlay
//! - Save the on-screen share card as PNG

use std::time::Instant;

use quotui::logic;
use quotui::quotes::QuoteId;
use quotui::services::ExportRequest;

use crate::App;

impl App {
    /// Copy quotation `id` and acknowledge it on its card
    ///
    /// The acknowledgment shows even when the clipboard fails.
    pub(crate) fn copy_quote(&mut self, id: QuoteId) {
        let Some(quote) = self.model.gallery.quotes.find(id) else {
            return;
        };
        let text = logic::format::clipboard_text(quote);

        if let Err(e) = self.clipboard.write_text(&text) {
            tracing::warn!("Clipboard write for quote {} failed: {}", id, e);
        } else {
            tracing::debug!("Copied quote {} ({} bytes)", id, text.len());
        }

        self.model.copy_acks.mark(id, Instant::now());
    }

    /// Copy the quotation in front: random pick, else the selected card
    pub(crate) fn copy_current(&mut self) {
        if let Some(id) = self.current_quote_id() {
            self.copy_quote(id);
        }
    }

    /// Open the share overlay for quotation `id`
    pub(crate) fn share_quote(&mut self, id: QuoteId) {
        if self.model.gallery.request_share(id) {
            tracing::debug!("Share overlay opened for quote {}", id);
        }
    }

    /// Share the quotation in front: random pick, else the selected card
    pub(crate) fn share_current(&mut self) {
        if let Some(id) = self.current_quote_id() {
            self.share_quote(id);
        }
    }

    /// Send the captured share card to the export worker
    ///
    /// Without a captured card nothing is sent and no file is written.
    pub(crate) fn download_share_card(&mut self) {
        if self.model.gallery.share_pick.is_none() {
            return;
        }

        let filename = self.model.gallery.export_filename();
        let Some(target) = self.model.ui.share_target.clone() else {
            tracing::warn!("Download of {} skipped: share card is not on screen", filename);
            self.model.show_toast("Error: share card is not on screen".to_string());
            return;
        };

        tracing::debug!("Requesting export of {}", filename);
        let request = ExportRequest::SaveCard {
            target: Some(target),
            filename,
        };
        if self.export_tx.send(request).is_ok() {
            self.model.ui.exports_in_flight += 1;
        } else {
            self.model.show_toast("Error: export worker stopped".to_string());
        }
    }

    fn current_quote_id(&self) -> Option<QuoteId> {
        self.model
            .gallery
            .random_quote()
            .or_else(|| self.model.gallery.selected_quote())
            .map(|q| q.id)
    }
}
