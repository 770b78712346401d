//! The [`Version`] value type
//!
//! # Modules
//!
//! - [`parser`]: string → `Version` (`parse`, `try_parse`, `FromStr`)
//! - [`format`]: `Version` → string under [`FormatOptions`](format::FormatOptions)
//! - [`compare`]: field-wise ordering and the equality operators
//! - [`error`]: [`VersionFormatError`](error::VersionFormatError)

pub mod compare;
pub mod error;
pub mod format;
pub mod parser;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

/// Number of fields always considered present (major and minor).
pub(crate) const MIN_SIGNIFICANT_FIELDS: u8 = 2;

/// A dotted numeric version with an optional release tag.
///
/// `significant_fields` counts how many of major/minor/revision/build were
/// supplied, independently of their values, so that `1.2` and `1.2.0` render
/// differently while still comparing equal.
#[derive(Debug, Clone)]
pub struct Version {
    major: i32,
    minor: i32,
    revision: i32,
    build: i32,
    release: String,
    release_set: bool,
    significant_fields: u8,
}

impl Default for Version {
    fn default() -> Self {
        Self {
            major: 0,
            minor: 0,
            revision: 0,
            build: 0,
            release: String::new(),
            release_set: false,
            significant_fields: MIN_SIGNIFICANT_FIELDS,
        }
    }
}

impl Version {
    /// `major.minor`
    pub fn new(major: i32, minor: i32) -> Self {
        Self {
            major,
            minor,
            ..Self::default()
        }
    }

    /// `major.minor` with a release tag
    pub fn with_release(major: i32, minor: i32, release: impl Into<String>) -> Self {
        Self {
            release: release.into(),
            release_set: true,
            ..Self::new(major, minor)
        }
    }

    /// `major.minor.revision`
    pub fn with_revision(major: i32, minor: i32, revision: i32) -> Self {
        Self {
            revision,
            significant_fields: 3,
            ..Self::new(major, minor)
        }
    }

    /// `major.minor.revision` with a release tag
    pub fn with_revision_and_release(
        major: i32,
        minor: i32,
        revision: i32,
        release: impl Into<String>,
    ) -> Self {
        Self {
            release: release.into(),
            release_set: true,
            ..Self::with_revision(major, minor, revision)
        }
    }

    /// `major.minor.revision.build`
    pub fn with_build(major: i32, minor: i32, revision: i32, build: i32) -> Self {
        Self {
            build,
            significant_fields: 4,
            ..Self::with_revision(major, minor, revision)
        }
    }

    /// `major.minor.revision.build` with a release tag.
    ///
    /// The release counts as a fifth significant field, so the default
    /// rendering includes it whenever it is non-empty.
    pub fn with_build_and_release(
        major: i32,
        minor: i32,
        revision: i32,
        build: i32,
        release: impl Into<String>,
    ) -> Self {
        Self {
            release: release.into(),
            release_set: true,
            significant_fields: 5,
            ..Self::with_build(major, minor, revision, build)
        }
    }

    pub fn major(&self) -> i32 {
        self.major
    }

    pub fn minor(&self) -> i32 {
        self.minor
    }

    pub fn revision(&self) -> i32 {
        self.revision
    }

    pub fn build(&self) -> i32 {
        self.build
    }

    pub fn release(&self) -> &str {
        &self.release
    }

    /// Whether a release tag was supplied, even an empty one.
    pub fn release_set(&self) -> bool {
        self.release_set
    }

    /// Numeric fields supplied by the source (2 to 4), or 5 after a
    /// release tag that followed four numeric fields.
    pub fn significant_fields(&self) -> u8 {
        self.significant_fields
    }

    /// Total addressable fields: the significant ones plus one for a
    /// present release tag, never more than 5.
    pub fn fields(&self) -> u8 {
        if self.significant_fields < 5 && self.release_set {
            self.significant_fields + 1
        } else {
            self.significant_fields
        }
    }

    /// True for the default sentinel.
    ///
    /// A parsed or constructed `0.0` is indistinguishable from it.
    pub fn is_empty(&self) -> bool {
        self.major == 0
            && self.minor == 0
            && self.revision == 0
            && self.build == 0
            && self.release.is_empty()
            && self.significant_fields == MIN_SIGNIFICANT_FIELDS
            && !self.release_set
    }

    /// Resets to the empty sentinel.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl From<(i32, i32)> for Version {
    fn from((major, minor): (i32, i32)) -> Self {
        Self::new(major, minor)
    }
}

impl From<(i32, i32, i32)> for Version {
    fn from((major, minor, revision): (i32, i32, i32)) -> Self {
        Self::with_revision(major, minor, revision)
    }
}

impl From<(i32, i32, i32, i32)> for Version {
    fn from((major, minor, revision, build): (i32, i32, i32, i32)) -> Self {
        Self::with_build(major, minor, revision, build)
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.try_canonical_string() {
            Some(s) => serializer.serialize_str(&s),
            None => Err(ser::Error::custom(format!(
                "version {:?} has no string form that parses back",
                self.to_canonical_string()
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Version::parse(&s).map_err(de::Error::custom)
    }
}
