use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use super::order_extraction_service::ExtractionError;

const DATA_URI_PREFIX: &str = "data:";
const DATA_URI_MARKER: &str = ";base64,";

const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decodes the uploaded base64 file. Accepts `data:` URIs and line-wrapped input.
pub fn decode_payload(payload: &str) -> Result<Vec<u8>, ExtractionError> {
    let trimmed = payload.trim();
    let encoded = match trimmed.strip_prefix(DATA_URI_PREFIX) {
        Some(rest) => rest
            .split_once(DATA_URI_MARKER)
            .map(|(_, data)| data)
            .ok_or_else(|| {
                ExtractionError::InvalidInput("El data URI no contiene datos base64".to_string())
            })?,
        None => trimmed,
    };

    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(ExtractionError::no_file());
    }

    LENIENT_BASE64
        .decode(compact.as_bytes())
        .map_err(|e| ExtractionError::InvalidInput(format!("El archivo no es base64 válido: {e}")))
}
