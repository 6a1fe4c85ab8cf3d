//! Generator pipeline: load → validate → render → write.
//!
//! Each stage is a plain function over the previous stage's output and can
//! be tested on its own. [`generate`] chains them for the driver.

use std::collections::HashSet;
use std::fmt::{self, Write as _};
use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::config::{Config, Patterns, RenderTarget};
use crate::error::{CodegenError, Field, ValidationError};
use crate::source::{MessageDef, MessageSet};

// ─── Load ───────────────────────────────────────────────────────────────────

/// Read and decode a message catalogue from `path`.
pub fn load_messages(path: &Path) -> Result<MessageSet, CodegenError> {
    let text = fs::read_to_string(path).map_err(|source| CodegenError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let set = parse_messages(&text)?;
    debug!("loaded {} message(s) from {}", set.len(), path.display());
    Ok(set)
}

/// Decode a message catalogue from YAML text.
///
/// A document with no content (blank, comments only, or `null`) is an
/// empty catalogue rather than an error.
pub fn parse_messages(text: &str) -> Result<MessageSet, CodegenError> {
    if is_blank_document(text) {
        return Ok(MessageSet::default());
    }
    let set: Option<MessageSet> = serde_yaml::from_str(text)?;
    Ok(set.unwrap_or_default())
}

fn is_blank_document(text: &str) -> bool {
    text.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

// ─── Validate ───────────────────────────────────────────────────────────────

/// Check codes and names against `patterns` and for uniqueness.
///
/// Definitions are visited in declaration order and, within one definition,
/// checks run as code shape, code uniqueness, name shape, name uniqueness.
/// The first violation is returned, so the same input always reports the
/// same error.
pub fn validate(set: &MessageSet, patterns: &Patterns) -> Result<(), ValidationError> {
    let mut seen_codes: HashSet<&str> = HashSet::new();
    let mut seen_names: HashSet<&str> = HashSet::new();

    for m in set {
        if !patterns.code.is_match(&m.code) {
            return Err(ValidationError::ShapeMismatch {
                field: Field::Code,
                message: m.name.clone(),
                value: m.code.clone(),
                pattern: patterns.code.as_str().to_string(),
            });
        }
        if !seen_codes.insert(m.code.as_str()) {
            return Err(ValidationError::DuplicateCode {
                message: m.name.clone(),
                code: m.code.clone(),
            });
        }

        if !patterns.name.is_match(&m.name) {
            return Err(ValidationError::ShapeMismatch {
                field: Field::Name,
                message: m.name.clone(),
                value: m.name.clone(),
                pattern: patterns.name.as_str().to_string(),
            });
        }
        if !seen_names.insert(m.name.as_str()) {
            return Err(ValidationError::DuplicateName {
                message: m.name.clone(),
            });
        }
    }
    debug!("validated {} message(s)", set.len());
    Ok(())
}

// ─── Render ─────────────────────────────────────────────────────────────────

const HEADER: &str = "// GENERATED FILE -- DO NOT EDIT\n//\n";

/// Expand the Go source for `set` into a string.
///
/// Everything is emitted in declaration order. Field values are inserted as
/// written; in particular `args[].type` is trusted to name a real Go type.
pub fn render(set: &MessageSet, target: &RenderTarget) -> Result<String, CodegenError> {
    let mut out = String::new();
    render_into(&mut out, set, target)?;
    Ok(out)
}

fn render_into(out: &mut String, set: &MessageSet, target: &RenderTarget) -> fmt::Result {
    let diag = qualifier(&target.diag_import);
    let resource = qualifier(&target.resource_import);

    writeln!(out, "{HEADER}")?;
    writeln!(out, "package {}", target.package)?;
    writeln!(out)?;
    writeln!(out, "import (")?;
    writeln!(out, "\t\"{}\"", target.diag_import)?;
    writeln!(out, "\t\"{}\"", target.resource_import)?;
    writeln!(out, ")")?;
    writeln!(out)?;

    // ── message values ──
    writeln!(out, "var (")?;
    for (i, m) in set.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(
            out,
            "\t// {name} defines a {diag}.MessageType for message \"{name}\".",
            name = m.name
        )?;
        write_description(out, &m.description)?;
        writeln!(
            out,
            "\t{} = {diag}.NewMessageType({diag}.{}, \"{}\", \"{}\")",
            m.name, m.level, m.code, m.template
        )?;
    }
    writeln!(out, ")")?;
    writeln!(out)?;

    // ── aggregate accessor ──
    writeln!(out, "// All returns a list of all known message types.")?;
    writeln!(out, "func All() []*{diag}.MessageType {{")?;
    writeln!(out, "\treturn []*{diag}.MessageType{{")?;
    for m in set {
        writeln!(out, "\t\t{},", m.name)?;
    }
    writeln!(out, "\t}}")?;
    writeln!(out, "}}")?;

    // ── constructors ──
    for m in set {
        writeln!(out)?;
        write_constructor(out, m, diag, resource)?;
    }
    Ok(())
}

fn write_description(out: &mut String, description: &str) -> fmt::Result {
    let mut lines = description.lines();
    match lines.next() {
        Some(first) if !first.is_empty() => writeln!(out, "\t// Description: {first}")?,
        _ => writeln!(out, "\t// Description:")?,
    }
    for line in lines {
        if line.is_empty() {
            writeln!(out, "\t//")?;
        } else {
            writeln!(out, "\t// {line}")?;
        }
    }
    Ok(())
}

fn write_constructor(out: &mut String, m: &MessageDef, diag: &str, resource: &str) -> fmt::Result {
    let ctor = m.constructor_name();
    writeln!(
        out,
        "// {ctor} returns a new {diag}.Message based on {}.",
        m.name
    )?;
    write!(out, "func {ctor}(r *{resource}.Instance")?;
    for arg in &m.args {
        write!(out, ", {} {}", arg.name, arg.ty)?;
    }
    writeln!(out, ") {diag}.Message {{")?;
    writeln!(out, "\treturn {diag}.NewMessage(")?;
    writeln!(out, "\t\t{},", m.name)?;
    writeln!(out, "\t\tr,")?;
    for arg in &m.args {
        writeln!(out, "\t\t{},", arg.name)?;
    }
    writeln!(out, "\t)")?;
    writeln!(out, "}}")
}

/// Package qualifier for an import path: its last path segment.
fn qualifier(import: &str) -> &str {
    import.rsplit('/').next().unwrap_or(import)
}

// ─── Write ──────────────────────────────────────────────────────────────────

/// Write generated source to `path`, replacing any existing file.
pub fn write_output(path: &Path, text: &str) -> Result<(), CodegenError> {
    let write_err = |source: std::io::Error| CodegenError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, text).map_err(write_err)
}

/// Run every stage for one catalogue. Nothing is written unless loading,
/// validation and rendering all succeed.
pub fn generate(input: &Path, output: &Path, config: &Config) -> Result<(), CodegenError> {
    let set = load_messages(input)?;
    validate(&set, &config.patterns)?;
    let code = render(&set, &config.target)?;
    write_output(output, &code)?;
    info!(
        "generated {} message(s) into {}",
        set.len(),
        output.display()
    );
    Ok(())
}
