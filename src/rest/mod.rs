//! Gemini REST API client.
//!
//! Provides the public market data endpoints and the signed private endpoints.
//!
//! # Trait-based API
//!
//! The [`GeminiClient`] trait abstracts all REST API operations, enabling:
//! - Mock implementations for testing
//! - Stateful helpers in [`crate::manager`] that are generic over the client
//!
//! ```rust,ignore
//! use gemini_api_client::rest::{GeminiClient, RestClient};
//!
//! async fn use_client<C: GeminiClient>(client: &C) -> Result<(), gemini_api_client::GeminiError> {
//!     let symbols = client.get_symbols().await?;
//!     println!("Symbols: {symbols:?}");
//!     Ok(())
//! }
//! ```

mod client;
pub mod endpoints;
pub mod private;
pub mod public;
pub mod response;
mod traits;

pub use client::{DEFAULT_TIMEOUT, RestClient, RestClientBuilder};
pub use endpoints::Environment;
pub use response::{RawResponse, parse_response, parse_typed};
pub use traits::GeminiClient;
