//! Named icon references.
//!
//! Icons are identified by symbolic names (`"arrowtriangle.up.fill"`,
//! `"clock"`, ...). Turning a name into pixels or glyphs is the host's job.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An icon name resolved by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconId(Cow<'static, str>);

impl IconId {
    /// Icon known at compile time
    pub const fn new_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for IconId {
    fn from(name: &'static str) -> Self {
        Self::new_static(name)
    }
}

impl From<String> for IconId {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

// --- Well-known icons ---

pub const ARROW_UP: IconId = IconId::new_static("arrowtriangle.up.fill");
pub const ARROW_DOWN: IconId = IconId::new_static("arrowtriangle.down.fill");
pub const ARROW_RIGHT: IconId = IconId::new_static("arrowtriangle.right.fill");
pub const CLOCK: IconId = IconId::new_static("clock");
pub const INFO: IconId = IconId::new_static("info.circle");
pub const DOT: IconId = IconId::new_static("circle.fill");
