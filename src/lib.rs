//! osv - configuration for operating-system vaults.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── config        # config get/set/rm/ls/path
//! │   ├── secrets       # get/set/rm/ls/rename
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── document/     # .kvc document engine
//!     │   ├── element   # Blank / comment / single / multi-line values
//!     │   ├── parser    # Line scanner state machine
//!     │   └── persist   # load / save / save_as
//!     ├── config        # osv.kvc location and keyring settings
//!     ├── constants     # File names, env vars, config keys
//!     └── store/        # Secret store backends
//!         ├── mod       # SecretStore trait
//!         ├── memory    # In-memory backend
//!         └── document  # .kvc file backend
//! ```
//!
//! # The `.kvc` dialect
//!
//! ```text
//! # comment
//! service=work
//! cert=EOF
//! -----BEGIN-----
//! ...
//! EOF
//! literal=ends in =EOF=EOF
//! ```
//!
//! Documents keep blank lines, comments and key order, so editing a value
//! and saving leaves the rest of the file where it was.

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::document::{Document, Element};
pub use crate::error::{Error, Result};
