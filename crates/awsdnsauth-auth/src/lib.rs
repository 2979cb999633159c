//! AWS3-HTTPS request signing for the Route 53 API.
//!
//! Route 53 authenticates requests with an HMAC-SHA256 signature of the
//! request date, carried in the `X-Amzn-Authorization` header next to the
//! signed `x-amz-date` header. This crate computes that signature and loads
//! the credentials it is keyed with. It performs no network I/O.
//!
//! # Usage
//!
//! ```rust
//! use awsdnsauth_auth::{Credentials, RequestSigner};
//!
//! let credentials = Credentials::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY");
//! let headers = RequestSigner::new(&credentials)
//!     .sign_date("Thu, 14 Aug 2013 00:00:00 GMT")
//!     .unwrap();
//!
//! assert_eq!(
//!     headers.authorization(),
//!     "AWS3-HTTPS AWSAccessKeyId=AKIDEXAMPLE,Algorithm=HmacSHA256,\
//!      Signature=cmQq24XtPfy7Hv+APbxLYCjO24rEwtTTGYleIwimnBQ="
//! );
//! ```
//!
//! # Modules
//!
//! - [`credentials`] - Credentials model and credentials-file loader
//! - [`error`] - Authentication error types
//! - [`signer`] - Signature computation and header assembly

pub mod credentials;
pub mod error;
pub mod signer;

pub use credentials::Credentials;
pub use error::AuthError;
pub use signer::{RequestSigner, Signature, SignedHeaders, build_auth_header, sign};
