mod extract;
mod health;

pub use extract::{
    ErrorResponse, ExtractRequest, ExtractResponse, extract_handler, method_not_allowed_handler,
    preflight_handler,
};
pub use health::health_handler;
