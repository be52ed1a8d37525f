/// Error code registry for cupid-clean
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 3000-3999: Filesystem errors
/// - 9000-9999: Other errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_YAML: u16 = 1002;
    pub const CONFIG_MISSING_REQUIRED: u16 = 1004;
    pub const CONFIG_UNREADABLE: u16 = 1006;

    // Filesystem errors (3000-3999)
    pub const STORAGE_IO_ERROR: u16 = 3001;
    pub const STORAGE_PERMISSION_DENIED: u16 = 3002;
    pub const STORAGE_NOT_FOUND: u16 = 3004;

    // Other errors (9000-9999)
    pub const OTHER_GENERIC: u16 = 9000;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        1001 => "Configuration file not found",
        1002 => "Invalid YAML syntax in configuration",
        1004 => "Required configuration field is missing",
        1006 => "Configuration file could not be read",

        3001 => "Filesystem I/O error",
        3002 => "Filesystem permission denied",
        3004 => "Directory not found",

        9000 => "Generic error",

        _ => "Unknown error code",
    }
}
