//! Rendering a [`Version`] back to text

use std::fmt;

use super::Version;

/// Separator placed between the numeric part and the release tag by default
pub const DEFAULT_RELEASE_SEPARATOR: &str = "_";

/// Separator that [`Version::parse`] understands
pub const CANONICAL_RELEASE_SEPARATOR: &str = "-";

/// Formatting rules for [`Version::format`]
///
/// `None` fields fall back to the state of the value being formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Fields to emit; defaults to the value's significant field count
    pub field_count: Option<usize>,
    /// Force the release tag in or out; defaults to whether one was supplied
    pub include_release: Option<bool>,
    /// Placed verbatim before the release tag
    pub release_separator: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            field_count: None,
            include_release: None,
            release_separator: DEFAULT_RELEASE_SEPARATOR.to_string(),
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field_count(mut self, field_count: usize) -> Self {
        self.field_count = Some(field_count);
        self
    }

    pub fn include_release(mut self, include_release: bool) -> Self {
        self.include_release = Some(include_release);
        self
    }

    pub fn release_separator(mut self, separator: impl Into<String>) -> Self {
        self.release_separator = separator.into();
        self
    }
}

impl Version {
    /// Render with the given options.
    ///
    /// `major.minor` is always emitted; revision from 3 fields, build from 4.
    /// The release tag is appended when explicitly requested (even if empty),
    /// or when 5 fields are requested and the tag is non-empty.
    pub fn format(&self, options: &FormatOptions) -> String {
        let field_count = options
            .field_count
            .unwrap_or(usize::from(self.significant_fields));
        let include_release = options.include_release.unwrap_or(self.release_set);

        let mut s = format!("{}.{}", self.major, self.minor);
        if field_count >= 3 {
            s.push_str(&format!(".{}", self.revision));
        }
        if field_count >= 4 {
            s.push_str(&format!(".{}", self.build));
        }
        if (field_count >= 5 && !self.release.is_empty()) || include_release {
            s.push_str(&options.release_separator);
            s.push_str(&self.release);
        }
        s
    }

    /// Positional form of [`Version::format`].
    pub fn to_string_with(
        &self,
        field_count: usize,
        include_release: bool,
        release_separator: &str,
    ) -> String {
        self.format(&FormatOptions {
            field_count: Some(field_count),
            include_release: Some(include_release),
            release_separator: release_separator.to_string(),
        })
    }

    /// Render with `-` before the release tag, the separator the parser reads.
    ///
    /// The output does not always parse back: a `.` in the release tag reads
    /// as further numeric fields, and a negative field reads as a tag.
    /// Use [`Version::try_canonical_string`] when the text must round-trip.
    pub fn to_canonical_string(&self) -> String {
        self.format(&FormatOptions::new().release_separator(CANONICAL_RELEASE_SEPARATOR))
    }

    /// The canonical string, if parsing it gives back the same numbers,
    /// release tag and field count.
    pub fn try_canonical_string(&self) -> Option<String> {
        let s = self.to_canonical_string();
        let reparsed = Version::parse(&s).ok()?;

        let same = (reparsed.major, reparsed.minor, reparsed.revision, reparsed.build)
            == (self.major, self.minor, self.revision, self.build)
            && reparsed.release == self.release
            && reparsed.release_set == self.release_set
            && reparsed.fields() == self.fields();
        same.then_some(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(&FormatOptions::default()))
    }
}
