//! DefinitiveID Registry Client
//!
//! Resolves `did:andorra` identifiers against the DefinitiveID public
//! identity registry and classifies the outcome into the Universal Resolver
//! error codes.
//!
//! # Example
//!
//! ```no_run
//! use definitiveid_client::RegistryClient;
//!
//! # async fn example() -> Result<(), definitiveid_client::ResolveError> {
//! let client = RegistryClient::new()?;
//! let document = client.resolve("did:andorra:NRTAD-710646J").await?;
//! println!("{}", document["id"]);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod types;

pub use client::RegistryClient;
pub use error::{ResolveError, Result};
pub use types::{ClientConfig, DidDocument, ErrorKind, DEFAULT_BASE_URL};
