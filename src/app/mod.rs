//! Console output for the binary.

pub mod output;

// Re-export public API
pub use output::{format_coordinates, format_pass_line, print_pass_times, write_pass_times};
