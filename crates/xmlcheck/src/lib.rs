//! External RELAX NG validation.
//!
//! Documents are staged to a per-call temporary file and checked by an
//! external validator process (jing, run under a JVM). The process result is
//! folded into an [`Outcome`] by [`classify`].

pub mod jing;
pub mod outcome;

pub use jing::JingValidator;
pub use outcome::{classify, Outcome};

use anyhow::Result;
use async_trait::async_trait;

/// Checks one XML document against the configured grammar.
///
/// `Err` is reserved for failures to stage the document on disk. A validator
/// process that cannot be started at all is reported as an invalid
/// [`Outcome`], not as an error.
#[async_trait]
pub trait XmlValidator: Send + Sync {
    async fn validate(&self, document: &str) -> Result<Outcome>;
}
