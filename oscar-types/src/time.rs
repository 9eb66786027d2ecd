use serde::{Deserialize, Serialize};

/// Raw OSC time tag: seconds since 1900-01-01 and a 1/2^32 second fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct NtpTime {
    pub seconds: u32,
    pub fraction: u32,
}

impl NtpTime {
    /// The reserved "execute immediately" pair `(0, 1)`.
    pub const IMMEDIATE: NtpTime = NtpTime { seconds: 0, fraction: 1 };

    pub const fn new(seconds: u32, fraction: u32) -> Self {
        Self { seconds, fraction }
    }

    pub fn is_immediate(&self) -> bool {
        *self == Self::IMMEDIATE
    }
}

impl From<(u32, u32)> for NtpTime {
    fn from((seconds, fraction): (u32, u32)) -> Self {
        Self { seconds, fraction }
    }
}

/// A time tag in both representations.
///
/// `raw` is what goes on the wire. `native` is milliseconds since the Unix
/// epoch; for the immediate sentinel it holds the wall clock at the moment the
/// tag was decoded or built, so equality only looks at `raw`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimeTag {
    pub raw: NtpTime,
    pub native: f64,
}

impl PartialEq for TimeTag {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for TimeTag {}

impl TimeTag {
    pub fn is_immediate(&self) -> bool {
        self.raw.is_immediate()
    }
}
