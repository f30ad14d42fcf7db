//! Error mapping guide:
//! - Map io::ErrorKind::NotFound to exit code 127; all others to 1.
//! - The library carries errors through anyhow; the binary downcasts at the
//!   boundary to recover the io::Error kind for exit-code mapping.
use std::io;

/// Map an io::Error to a process exit code:
/// - 127 for NotFound (command not found)
/// - 1 for all other errors
pub fn exit_code_for_io_error(e: &io::Error) -> u8 {
    if e.kind() == io::ErrorKind::NotFound {
        127
    } else {
        1
    }
}

/// Walk an anyhow chain looking for an io::Error and map it; default 1.
pub fn exit_code_for_error(e: &anyhow::Error) -> u8 {
    for cause in e.chain() {
        if let Some(ioe) = cause.downcast_ref::<io::Error>() {
            return exit_code_for_io_error(ioe);
        }
    }
    1
}
