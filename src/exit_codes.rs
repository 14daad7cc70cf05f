//! Exit codes used by the reflow binary

/// The paragraph was reflowed, or there was nothing to do
pub const SUCCESS: i32 = 0;

/// `--check` found a paragraph that is not filled
pub const NEEDS_REFLOW: i32 = 1;

/// Bad arguments, unreadable input or invalid configuration
pub const TOOL_ERROR: i32 = 2;

pub mod exit {
    use super::*;

    pub fn success() -> ! {
        std::process::exit(SUCCESS);
    }

    pub fn needs_reflow() -> ! {
        std::process::exit(NEEDS_REFLOW);
    }

    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR);
    }
}
