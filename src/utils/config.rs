//! Configuration and constants for the CLI.

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Name used for frames that cannot be classified
pub const UNKNOWN_NAME: &str = "(unknown)";

// Category markers prepended to classified frame names
pub const NATIVE_MARKER: &str = "(C++) ";
pub const LIBRARY_MARKER: &str = "(lib) ";
pub const IC_MARKER: &str = "(IC) ";
pub const BYTECODE_MARKER: &str = "(bytecode) ";
pub const STUB_MARKER: &str = "(stub) ";
pub const BUILTIN_MARKER: &str = "(builtin) ";
pub const REGEXP_MARKER: &str = "(regexp) ";
pub const ANONYMOUS_MARKER: &str = "(anonymous)";
pub const DEOPTIMIZED_MARKER: &str = "~";

/// Replacement for the directory prefix shared by every script
pub const SHARED_PREFIX_PLACEHOLDER: &str = "./";

/// Refinement tags of generated code that are inline caches
pub const IC_KINDS: &[&str] = &[
    "LoadIC",
    "StoreIC",
    "KeyedStoreIC",
    "KeyedLoadIC",
    "LoadGlobalIC",
    "StoreGlobalIC",
    "StoreInArrayLiteralIC",
    "Handler",
];

pub const DEFAULT_TOP_FRAMES: usize = 20;
pub const MAX_TOP_FRAMES: usize = 1000;
