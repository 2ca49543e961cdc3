pub mod client;
pub mod config;
pub mod fallback;
pub mod simplifier;

pub use client::{
    ContentExtractor, ExtractionClient, ExtractionRequest, ExtractionResult, ProtectionError,
};
pub use config::ClientConfig;
pub use fallback::fallback;
pub use simplifier::simplify;
