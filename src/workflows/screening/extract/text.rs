use tracing::warn;

const PDF_MAGIC: &[u8] = b"%PDF";

/// Pull normalized text out of a resume document.
///
/// PDF bytes go through `pdf-extract`; any other valid UTF-8 payload is
/// treated as plain text. The result is lowercased and trimmed. Corrupt or
/// unrecognized input yields the empty string so one bad document never
/// aborts a batch.
pub(crate) fn extract_text(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return String::new();
    }

    let raw = if bytes.starts_with(PDF_MAGIC) {
        match pdf_extract::extract_text_from_mem(bytes) {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "failed to extract text from PDF document");
                return String::new();
            }
        }
    } else {
        match std::str::from_utf8(bytes) {
            Ok(text) => text.to_string(),
            Err(_) => {
                warn!("document is neither a PDF nor valid UTF-8 text");
                return String::new();
            }
        }
    };

    raw.to_lowercase().trim().to_string()
}
