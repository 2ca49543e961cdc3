pub mod classify;
pub mod errors;
pub mod http;
pub mod types;

#[cfg(test)]
mod tests;

pub use classify::{MalformedReason, Outcome, classify};
pub use errors::{BuildError, ProtectionError, TransportError};
pub use http::{ContentExtractor, ExtractionClient};
pub use types::{ExtractionRequest, ExtractionResult};
