//! Ordering of [`Version`] values
//!
//! Numeric fields are compared as a `(major, minor, revision, build)` tuple.
//! Release tags are not ranked: when the numbers tie, a difference in tag
//! presence that is also a difference in tag text makes the left-hand side
//! `Less`, whichever side carries the tag.
//!
//! Neither relation is transitive or dual: `1.2- == 1.2` and `1.2- == 1.2-x`
//! hold while `1.2 != 1.2-x`, and `1.2 < 1.2-x` holds together with
//! `1.2-x < 1.2`. `Version` therefore implements neither `Eq` nor `Ord`, and
//! `slice::sort_by(Version::compare)` may panic on such ties in recent std.
//! Sort only values whose numeric fields or tag presence agree.

use std::cmp::Ordering;

use super::Version;

impl Version {
    /// Compare two versions.
    pub fn compare(&self, other: &Self) -> Ordering {
        let lhs = (self.major, self.minor, self.revision, self.build);
        let rhs = (other.major, other.minor, other.revision, other.build);

        match lhs.cmp(&rhs) {
            Ordering::Equal
                if self.release_set != other.release_set && self.release != other.release =>
            {
                Ordering::Less
            }
            ordering => ordering,
        }
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}
