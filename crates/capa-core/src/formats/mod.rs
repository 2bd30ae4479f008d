//! # Wire Formats
//!
//! Binary encodings that leave the process. File I/O is not done here.

pub mod snapshot;

pub use snapshot::{Snapshot, decode, encode};
