//! Typed error types for the generator, one variant family per stage.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Pipeline stage a failure belongs to.
///
/// The stage decides the stderr prefix and the process exit code, so callers
/// can tell which step failed without parsing the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Command-line arguments were missing or malformed.
    Args,
    /// The input catalogue could not be read or decoded.
    Read,
    /// The catalogue violated a naming or uniqueness rule.
    Validate,
    /// Expanding the output template failed.
    Render,
    /// The generated file could not be written.
    Write,
}

impl Stage {
    /// Process exit code reported for a failure in this stage.
    pub fn exit_code(self) -> u8 {
        match self {
            Stage::Args => 1,
            Stage::Read => 2,
            Stage::Validate => 3,
            Stage::Render => 4,
            Stage::Write => 5,
        }
    }

    /// Prefix printed in front of the error message.
    pub fn prefix(self) -> &'static str {
        match self {
            Stage::Args => "Invalid args",
            Stage::Read => "Error reading metadata",
            Stage::Validate => "Error validating messages",
            Stage::Render => "Error generating code",
            Stage::Write => "Error writing output file",
        }
    }
}

/// Any failure that aborts a generator run.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    /// Wrong number or shape of command-line arguments.
    #[error("{0}")]
    Usage(String),

    /// The input file could not be opened or read.
    #[error("unable to read input file {}: {source}", path.display())]
    Read {
        /// The path that was attempted.
        path: PathBuf,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },

    /// The input is not valid YAML or does not have the catalogue shape.
    #[error("{0}")]
    Parse(#[from] serde_yaml::Error),

    /// A message definition broke a naming or uniqueness rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Template expansion failed.
    #[error("template expansion failed: {0}")]
    Render(#[from] fmt::Error),

    /// The generated source could not be written.
    #[error("unable to write {}: {source}", path.display())]
    Write {
        /// The output path.
        path: PathBuf,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },
}

impl CodegenError {
    /// The stage that produced this error.
    pub fn stage(&self) -> Stage {
        match self {
            CodegenError::Usage(_) => Stage::Args,
            CodegenError::Read { .. } | CodegenError::Parse(_) => Stage::Read,
            CodegenError::Validation(_) => Stage::Validate,
            CodegenError::Render(_) => Stage::Render,
            CodegenError::Write { .. } => Stage::Write,
        }
    }

    /// Shorthand for `self.stage().exit_code()`.
    pub fn exit_code(&self) -> u8 {
        self.stage().exit_code()
    }
}

/// Which field a shape check was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The `code` field.
    Code,
    /// The `name` field.
    Name,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Code => write!(f, "Error code"),
            Field::Name => write!(f, "Name"),
        }
    }
}

/// The first catalogue rule violation found, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A code or name does not match its required pattern.
    #[error("{field} for message {message:?} must follow the regex {pattern}")]
    ShapeMismatch {
        /// Field that failed.
        field: Field,
        /// Name of the offending message.
        message: String,
        /// The rejected value.
        value: String,
        /// Pattern the value had to match.
        pattern: String,
    },

    /// A code was already used by an earlier message.
    #[error("Error codes must be unique, {code:?} defined more than once (at message {message:?})")]
    DuplicateCode {
        /// Name of the later message reusing the code.
        message: String,
        /// The repeated code.
        code: String,
    },

    /// A name was already used by an earlier message.
    #[error("Message names must be unique, {message:?} defined more than once")]
    DuplicateName {
        /// The repeated name.
        message: String,
    },
}

impl ValidationError {
    /// Name of the message the violation was reported against.
    pub fn message_name(&self) -> &str {
        match self {
            ValidationError::ShapeMismatch { message, .. }
            | ValidationError::DuplicateCode { message, .. }
            | ValidationError::DuplicateName { message } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_have_distinct_nonzero_exit_codes() {
        let stages = [
            Stage::Args,
            Stage::Read,
            Stage::Validate,
            Stage::Render,
            Stage::Write,
        ];
        let codes: std::collections::HashSet<u8> =
            stages.iter().map(|s| s.exit_code()).collect();
        assert_eq!(codes.len(), stages.len());
        assert!(!codes.contains(&0));
    }

    #[test]
    fn errors_map_to_their_stage() {
        let read = CodegenError::Read {
            path: "in.yaml".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "test"),
        };
        assert_eq!(read.stage(), Stage::Read);

        let parse = serde_yaml::from_str::<Vec<String>>("{").unwrap_err();
        assert_eq!(CodegenError::from(parse).stage(), Stage::Read);

        let invalid = CodegenError::from(ValidationError::DuplicateName {
            message: "Bar".into(),
        });
        assert_eq!(invalid.stage(), Stage::Validate);
        assert_eq!(invalid.exit_code(), 3);

        assert_eq!(CodegenError::from(fmt::Error).stage(), Stage::Render);
        assert_eq!(CodegenError::Usage("x".into()).stage(), Stage::Args);
    }

    #[test]
    fn shape_mismatch_message_names_message_and_pattern() {
        let err = ValidationError::ShapeMismatch {
            field: Field::Code,
            message: "Foo".into(),
            value: "IST001".into(),
            pattern: "^IST[0-9]{4}$".into(),
        };
        assert_eq!(
            err.to_string(),
            "Error code for message \"Foo\" must follow the regex ^IST[0-9]{4}$"
        );
        assert_eq!(err.message_name(), "Foo");
    }
}
