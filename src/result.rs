//! Result type used by the release-link binary.
//!
//! Library errors ([`release_link::ReleaseError`]) are converted into
//! `color_eyre` reports at this edge, which adds colorized output and
//! context when the CLI exits with an error.
//!
//! ```rust,ignore
//! use crate::result::Result;
//! use color_eyre::eyre::Context;
//!
//! fn run() -> Result<String> {
//!     let remote = forge.get_remote().wrap_err("invalid forge arguments")?;
//!     // ...
//! }
//! ```

use color_eyre::eyre::Result as EyreResult;

/// Standard result type of the binary: `color_eyre::eyre::Result<T>`.
pub type Result<T> = EyreResult<T>;
