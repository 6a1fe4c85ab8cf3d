//! Configuration types for the generator.
//!
//! The driver always runs with [`Config::default()`]; the knobs exist so
//! library callers and tests can point the same pipeline at another package.

use regex::Regex;

/// Required shape of every message code.
///
/// Character classes are spelled out so matching stays ASCII-only.
pub const CODE_PATTERN: &str = r"^IST[0-9]{4}$";

/// Required shape of every message name.
pub const NAME_PATTERN: &str = r"^[A-Z][A-Za-z0-9_]*$";

/// Complete generator configuration: validation patterns + render target.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Patterns enforced by the validator.
    pub patterns: Patterns,
    /// Package and import paths used by the renderer.
    pub target: RenderTarget,
}

/// Compiled validation patterns for codes and names.
#[derive(Debug, Clone)]
pub struct Patterns {
    /// Pattern every `code` must match.
    pub code: Regex,
    /// Pattern every `name` must match.
    pub name: Regex,
}

impl Patterns {
    /// Compile a custom pair of patterns.
    pub fn new(code: &str, name: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            code: Regex::new(code)?,
            name: Regex::new(name)?,
        })
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Self::new(CODE_PATTERN, NAME_PATTERN).expect("built-in patterns compile")
    }
}

/// Go package the generated file belongs to and the packages it imports.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTarget {
    /// Package clause of the generated file.
    pub package: String,
    /// Import path of the package providing `MessageType`, `Message` and
    /// the severity levels.
    pub diag_import: String,
    /// Import path of the package providing `Instance`.
    pub resource_import: String,
}

impl Default for RenderTarget {
    fn default() -> Self {
        Self {
            package: "msg".to_string(),
            diag_import: "istio.io/istio/galley/pkg/config/analysis/diag".to_string(),
            resource_import: "istio.io/istio/pkg/config/resource".to_string(),
        }
    }
}

impl RenderTarget {
    /// Target a different package, keeping the default import paths.
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }
}
