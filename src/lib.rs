//! # CsrGen - A Pure Rust CSR Generation Tool
//!
//! CsrGen generates an RSA private key and a PKCS#10 Certificate Signing Request
//! (CSR) from a small TOML configuration file, built entirely with rustcrypto
//! libraries and with no dependencies on ring or openssl (except for testing).
//! Both artifacts are written to disk as PEM files named after the configured
//! hostname.
//!
//! ## What It Produces
//!
//! - `<hostname>.key`: an unencrypted 2048-bit RSA private key in PKCS#1
//!   ("traditional") PEM format
//! - `<hostname>.csr`: a PKCS#10 certificate signing request in PEM format,
//!   signed with SHA-256, carrying the hostname as the subject common name and
//!   a non-critical Subject Alternative Name extension listing the configured
//!   DNS names
//!
//! ## Key Features
//!
//! - **Pure Rust**: Built entirely with rustcrypto libraries
//! - **SAN Support**: One DNS entry per configured name, configuration order
//!   preserved
//! - **Format Flexibility**: Requests encode to both PEM and DER, and parse
//!   back for inspection and signature verification
//! - **Single-Shot**: One invocation, two files, no state kept between runs
//!
//! ## Quick Start
//!
//! ### Generating a Key and Request
//!
//! ```rust,no_run
//! use csrgen::{
//!     key::KeyPair,
//!     request::{SigningRequest, params::{DistinguishedName, RequestParams}},
//! };
//!
//! # fn main() -> Result<(), csrgen::error::CsrGenError> {
//! // Generate an RSA key pair
//! let key_pair = KeyPair::generate(2048)?;
//!
//! // Describe the request subject and its alternative names
//! let subject = DistinguishedName::builder()
//!     .common_name("example.com".to_string())
//!     .build();
//!
//! let params = RequestParams::builder()
//!     .subject(subject)
//!     .dns_names(vec!["example.com".to_string(), "www.example.com".to_string()])
//!     .build();
//!
//! // Build and sign the request
//! let request = SigningRequest::build(&params, &key_pair)?;
//!
//! // Export to PEM format
//! println!("Key:\n{}", key_pair.to_pkcs1_pem()?);
//! println!("CSR:\n{}", request.to_pem()?);
//! # Ok(())
//! # }
//! ```
//!
//! ### Driving It from Configuration
//!
//! ```rust,no_run
//! use csrgen::{config::Config, key::KeyPair, request::{SigningRequest, params::RequestParams}};
//!
//! # fn main() -> Result<(), csrgen::error::CsrGenError> {
//! let config = Config::from_file(std::path::Path::new("host.toml"))?;
//!
//! let key_pair = KeyPair::generate(config.key_size())?;
//! let request = SigningRequest::build(&RequestParams::from_config(&config), &key_pair)?;
//!
//! std::fs::write(config.key_path(), key_pair.to_pkcs1_pem()?)?;
//! std::fs::write(config.csr_path(), request.to_pem()?)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! CsrGen uses a comprehensive error system that provides detailed information
//! about failures:
//!
//! ```rust
//! use csrgen::{key::KeyPair, error::CsrGenError};
//!
//! match KeyPair::from_pkcs1_pem("invalid pem data") {
//!     Ok(key_pair) => println!("Key imported successfully"),
//!     Err(CsrGenError::DecodingError(msg)) => println!("Failed to decode key: {}", msg),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: The TOML-backed host description and its derived paths
//! - [`key`]: RSA key generation, signing, and PEM import/export
//! - [`request`]: PKCS#10 request construction, encoding/decoding, and verification
//! - [`error`]: Comprehensive error types and handling
//! - [`pem_utils`]: Low-level PEM/DER conversion helpers

pub mod config;
pub mod error;
pub mod key;
pub mod pem_utils;
pub mod request;
