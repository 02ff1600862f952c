pub use self::error::ErrorMiddleware;
pub use self::security_headers::SecurityHeadersMiddleware;

mod error;
mod security_headers;
