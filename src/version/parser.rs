//! Parsing of dotted version strings
//!
//! Grammar:
//!
//! ```text
//! version_string := segment ("." segment)*
//! segment        := integer | integer "-" tag
//! ```
//!
//! The first `-` in a segment starts the release tag, so the numeric prefix
//! before it must still be a non-empty integer. Only the first four numeric
//! segments are stored; later ones are validated and dropped.

use std::num::IntErrorKind;
use std::str::FromStr;

use tracing::debug;

use super::Version;
use super::error::VersionFormatError;

impl Version {
    /// Parse a version string, failing with a [`VersionFormatError`].
    pub fn parse(input: &str) -> Result<Self, VersionFormatError> {
        parse_version(input).inspect_err(|e| debug!("Rejected version '{}': {}", input, e))
    }

    /// Parse a version string, returning `None` on failure.
    pub fn try_parse(input: &str) -> Option<Self> {
        Self::parse(input).ok()
    }

    /// Parse into `self`, committing only on success.
    ///
    /// Returns `false` and leaves `self` untouched when `input` is invalid.
    pub fn try_parse_into(&mut self, input: &str) -> bool {
        match Self::try_parse(input) {
            Some(v) => {
                *self = v;
                true
            }
            None => false,
        }
    }
}

fn parse_version(input: &str) -> Result<Version, VersionFormatError> {
    if input.is_empty() {
        return Err(VersionFormatError::Empty);
    }

    let mut v = Version::default();

    for (position, segment) in input.split('.').enumerate() {
        let numeric = match segment.split_once('-') {
            Some((numeric, release)) => {
                v.release = release.to_string();
                v.release_set = true;
                // A tag after four numeric fields counts as a fifth.
                if v.significant_fields == 4 {
                    v.significant_fields += 1;
                }
                numeric
            }
            None => segment,
        };

        let n = parse_field(position, segment, numeric)?;

        match position {
            0 => v.major = n,
            1 => v.minor = n,
            2 => {
                v.revision = n;
                v.significant_fields += 1;
            }
            3 => {
                v.build = n;
                v.significant_fields += 1;
            }
            _ => {}
        }
    }

    Ok(v)
}

fn parse_field(position: usize, segment: &str, numeric: &str) -> Result<i32, VersionFormatError> {
    // `i32::from_str` tolerates a leading `+`, the grammar does not.
    if numeric.starts_with('+') {
        return Err(VersionFormatError::InvalidField {
            position,
            segment: segment.to_string(),
        });
    }

    numeric.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => VersionFormatError::OutOfRange {
            position,
            segment: segment.to_string(),
        },
        _ => VersionFormatError::InvalidField {
            position,
            segment: segment.to_string(),
        },
    })
}

impl FromStr for Version {
    type Err = VersionFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}
