//! Map code table entries to display names.
//!
//! Each name carries a marker for its category so that native, library,
//! generated and script frames can be told apart in the flamegraph.

use crate::parser::CodeRef;
use crate::utils::config::{
    ANONYMOUS_MARKER, BUILTIN_MARKER, BYTECODE_MARKER, DEOPTIMIZED_MARKER, IC_KINDS,
    IC_MARKER, LIBRARY_MARKER, NATIVE_MARKER, REGEXP_MARKER, SHARED_PREFIX_PLACEHOLDER,
    STUB_MARKER, UNKNOWN_NAME,
};
use regex::Regex;
use std::sync::OnceLock;

/// Category of a code table entry (its `type` tag)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeCategory {
    /// Compiled runtime code (`CPP`)
    Native,
    /// Shared library code (`SHARED_LIB`)
    SharedLibrary,
    /// Code generated by the runtime: ICs, stubs, handlers (`CODE`)
    Generated,
    /// Script functions (`JS`)
    Script,
    Other,
}

impl std::str::FromStr for CodeCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "CPP" => Self::Native,
            "SHARED_LIB" => Self::SharedLibrary,
            "CODE" => Self::Generated,
            "JS" => Self::Script,
            _ => Self::Other,
        })
    }
}

/// Refinement of generated code (its `kind` tag)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratedKind {
    InlineCache,
    BytecodeHandler,
    Stub,
    Builtin,
    RegExp,
    Other,
}

impl GeneratedKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "BytecodeHandler" => Self::BytecodeHandler,
            "Stub" => Self::Stub,
            "Builtin" => Self::Builtin,
            "RegExp" => Self::RegExp,
            _ if IC_KINDS.contains(&tag) => Self::InlineCache,
            _ => Self::Other,
        }
    }

    fn marker(self) -> Option<&'static str> {
        match self {
            Self::InlineCache => Some(IC_MARKER),
            Self::BytecodeHandler => Some(BYTECODE_MARKER),
            Self::Stub => Some(STUB_MARKER),
            Self::Builtin => Some(BUILTIN_MARKER),
            Self::RegExp => Some(REGEXP_MARKER),
            Self::Other => None,
        }
    }
}

/// Optimization tier of a script function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptTier {
    /// Interpreted or builtin tier, shown with the deoptimized marker
    Unoptimized,
    Optimized,
    Other,
}

impl ScriptTier {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Unopt" | "Builtin" => Self::Unoptimized,
            "Opt" => Self::Optimized,
            _ => Self::Other,
        }
    }
}

/// Letter + space, then everything up to the argument list or template
fn native_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[a-zA-Z] ([^(<]*)").expect("static regex is valid"))
}

/// Classify a code entry into its display name
///
/// **Public** - called once per frame by the stack encoder
///
/// Never fails: absent entries and unrecognized categories become
/// [`UNKNOWN_NAME`].
pub fn classify(code: Option<&CodeRef>, shared_prefix: Option<&str>) -> String {
    let Some(code) = code else {
        return UNKNOWN_NAME.to_string();
    };
    let Some(kind) = code.kind() else {
        return UNKNOWN_NAME.to_string();
    };

    let name = code.raw_name();
    let category = kind.parse::<CodeCategory>().unwrap_or(CodeCategory::Other);

    match category {
        CodeCategory::Native => format!("{}{}", NATIVE_MARKER, native_name(name)),
        CodeCategory::SharedLibrary => format!("{}{}", LIBRARY_MARKER, name),
        CodeCategory::Generated => {
            let generated = GeneratedKind::from_tag(code.sub_kind().unwrap_or(""));
            match generated.marker() {
                Some(marker) => format!("{}{}", marker, name),
                None => UNKNOWN_NAME.to_string(),
            }
        }
        CodeCategory::Script => {
            script_name(name, code.sub_kind().unwrap_or(""), shared_prefix)
        }
        CodeCategory::Other => UNKNOWN_NAME.to_string(),
    }
}

/// Strip the symbol type letter and the signature from a C++ symbol
fn native_name(name: &str) -> &str {
    native_name_re()
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map_or(name, |m| m.as_str())
}

fn script_name(name: &str, tier: &str, shared_prefix: Option<&str>) -> String {
    let mut name = match shared_prefix {
        Some(prefix) if !prefix.is_empty() && name.contains(prefix) => {
            name.replacen(prefix, SHARED_PREFIX_PLACEHOLDER, 1)
        }
        _ => name.to_string(),
    };

    if name.starts_with(' ') {
        name.insert_str(0, ANONYMOUS_MARKER);
    }

    match ScriptTier::from_tag(tier) {
        ScriptTier::Unoptimized => format!("{}{}", DEOPTIMIZED_MARKER, name),
        ScriptTier::Optimized => name,
        ScriptTier::Other => UNKNOWN_NAME.to_string(),
    }
}
