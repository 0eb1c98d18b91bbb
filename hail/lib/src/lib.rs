//! Hail
//!
//! Tiny greeting-generation library: give it a name (or a batch of names)
//! and get back a welcome message picked at random from a small fixed set
//! of formats.
//!
//! ## Quick Start
//!
//! ```
//! use hail_lib::{greet, greet_all};
//!
//! let message = greet("Emily")?;
//! assert!(message.contains("Emily"));
//!
//! let messages = greet_all(["Prince", "Emily"])?;
//! assert_eq!(messages.len(), 2);
//! # Ok::<(), hail_lib::HailError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`format`] - The fixed greeting templates and random selection
//! - [`greet`](mod@greet) - Single and batch greeting generation
//! - [`error`] - Error types for greeting operations

pub mod error;
pub mod format;
pub mod greet;

// Re-export main types at crate root for convenience
pub use error::{HailError, Result};
pub use format::{GREETING_FORMATS, pick_format};
pub use greet::{greet, greet_all};
