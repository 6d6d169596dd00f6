//! Core domain types and traits for the Sparrow static-site provisioner.
//!
//! This crate contains:
//! - The site domain identifier
//! - Bucket payloads (website, public-access block, policy, placeholder object)
//! - Certificate summaries and certificate selection
//! - Distribution specification
//! - Provider traits for object storage, certificates and content delivery

pub mod certificate;
pub mod distribution;
pub mod domain;
pub mod error;
pub mod policy;
pub mod provider;
pub mod site;

pub use domain::Domain;
pub use error::{Error, Result};
