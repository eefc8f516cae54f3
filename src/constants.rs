//! Application constants for the range filter
//!
//! Dialect characters of the delimited text format and the default
//! filtering parameters.

// =============================================================================
// Text Dialect
// =============================================================================

/// Field delimiter
pub const DELIMITER: char = ',';

/// Quote character; toggles delimiter handling
pub const QUOTE: char = '"';

/// A quote directly after this character does not toggle quoting
pub const ESCAPE: char = '\\';

/// Terminator written after every output line
pub const LINE_TERMINATOR: &str = "\n";

// =============================================================================
// Filter Defaults
// =============================================================================

/// Column whose value decides eligibility
pub const DEFAULT_TARGET_COLUMN: &str = "Electric Range";

/// Records with a value strictly greater than this are eligible
pub const DEFAULT_THRESHOLD: i32 = 200;

/// Processed records between progress reports (0 disables reporting)
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100_000;
