use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

/// An image prepared for a vision request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    /// MIME type sent alongside the data ("image/png" or "image/jpeg")
    pub mime_type: &'static str,
    /// Base64-encoded image bytes
    pub data: String,
}

impl ImagePayload {
    /// Encodes raw image bytes. PNG is recognized by its signature, anything
    /// else is sent as JPEG.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mime_type = if bytes.starts_with(PNG_MAGIC) {
            "image/png"
        } else {
            "image/jpeg"
        };
        debug!("Encoding {} byte {} image", bytes.len(), mime_type);

        ImagePayload {
            mime_type,
            data: STANDARD.encode(bytes),
        }
    }

    /// `data:` URL form used by OpenAI-style chat APIs
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}
