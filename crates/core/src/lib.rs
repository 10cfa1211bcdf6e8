//! `sudood-core` — bilingual content foundation.
//!
//! This crate contains **pure domain** primitives shared by the catalog and
//! quote modules: the supported languages, bilingual text resolution, and the
//! domain error model. No IO, no HTTP.

pub mod error;
pub mod lang;
pub mod text;

pub use error::{DomainError, DomainResult};
pub use lang::Language;
pub use text::{Localized, TextOrLocalized};
