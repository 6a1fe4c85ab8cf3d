//! Diagnostic message generator: reads a YAML catalogue of diagnostic
//! messages, enforces naming and code rules, and emits the Go source that
//! declares each message type, an `All()` accessor and one `New<Name>`
//! constructor per message. This is a build-time tool, not a runtime
//! dependency of the generated package.
//!
//! The work is split into [`pipeline`] stages over the typed model in
//! [`source`]; failures are reported through [`error::CodegenError`], which
//! knows the stage it came from.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod source;

pub use config::{Config, Patterns, RenderTarget};
pub use error::{CodegenError, Field, Stage, ValidationError};
pub use source::{Arg, MessageDef, MessageSet};
