//! Dotted numeric version identifiers.
//!
//! A [`Version`] holds up to four numeric fields (`major.minor.revision.build`)
//! and an optional free-text release tag. It remembers how many fields were
//! actually supplied so it can be rendered back the way it was written.
//!
//! ```
//! use dotver::Version;
//!
//! let v: Version = "1.2.3.4-beta".parse().unwrap();
//! assert_eq!(v.build(), 4);
//! assert_eq!(v.release(), "beta");
//! assert_eq!(v.to_string(), "1.2.3.4_beta");
//! assert!(Version::new(2, 0) < Version::new(2, 1));
//! ```

pub mod config;
pub mod logging;
pub mod version;

pub use version::Version;
pub use version::error::VersionFormatError;
pub use version::format::{DEFAULT_RELEASE_SEPARATOR, FormatOptions};
