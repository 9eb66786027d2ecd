//! NTP time tags and their conversion to Unix milliseconds.
//!
//! OSC time tags count seconds from 1900-01-01 with a 1/2^32 second fraction.
//! The pair `(0, 1)` means "immediately" and never goes through the formula:
//! it decodes to the wall clock at read time.
//!
//! The seconds field is 32 bits wide, so it rolls over in 2036 (NTP era 1);
//! conversions wrap rather than fail.

use std::time::{SystemTime, UNIX_EPOCH};

use oscar_types::{NtpTime, TimeTag, NTP_UNIX_OFFSET, TWO_POW_32};

use crate::error::Result;
use crate::primitive::{write_uint32, Reader};

/// Wall-clock milliseconds since the Unix epoch.
pub fn now_millis() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

pub fn ntp_to_millis(raw: NtpTime) -> f64 {
    1000.0 * (raw.seconds as f64 - NTP_UNIX_OFFSET as f64 + raw.fraction as f64 / TWO_POW_32)
}

pub fn millis_to_ntp(millis: f64) -> NtpTime {
    let secs = millis / 1000.0;
    let whole = secs.floor();
    ntp_from_parts(whole, secs - whole)
}

/// Build the raw pair from whole Unix seconds and a fraction in `[0, 1)`.
fn ntp_from_parts(mut whole: f64, frac: f64) -> NtpTime {
    let mut fraction = (TWO_POW_32 * frac).round();
    // A fraction that rounds up to a full second carries.
    if fraction >= TWO_POW_32 {
        fraction -= TWO_POW_32;
        whole += 1.0;
    }
    let seconds = (whole as i64).wrapping_add(NTP_UNIX_OFFSET as i64);
    NtpTime {
        seconds: seconds as u32,
        fraction: fraction as u32,
    }
}

/// Time tag from its wire pair, filling in the native timestamp.
pub fn from_raw(raw: NtpTime) -> TimeTag {
    let native = if raw.is_immediate() {
        now_millis()
    } else {
        ntp_to_millis(raw)
    };
    TimeTag { raw, native }
}

/// Time tag from Unix milliseconds.
pub fn from_millis(millis: f64) -> TimeTag {
    TimeTag {
        raw: millis_to_ntp(millis),
        native: millis,
    }
}

/// The "execute immediately" time tag.
pub fn immediate() -> TimeTag {
    from_raw(NtpTime::IMMEDIATE)
}

/// Time tag `offset_secs` seconds from now.
pub fn make_time_tag(offset_secs: f64) -> TimeTag {
    make_time_tag_at(offset_secs, now_millis())
}

/// Time tag `offset_secs` seconds after `now_ms`.
///
/// Whole and fractional parts are summed separately so the fraction never
/// reaches a full second before the fixed-point conversion.
pub fn make_time_tag_at(offset_secs: f64, now_ms: f64) -> TimeTag {
    let now_secs = now_ms / 1000.0;
    let now_whole = now_secs.floor();
    let offset_whole = offset_secs.floor();

    let mut whole = now_whole + offset_whole;
    let mut frac = (now_secs - now_whole) + (offset_secs - offset_whole);
    if frac >= 1.0 {
        let carry = frac.floor();
        whole += carry;
        frac -= carry;
    }

    let raw = ntp_from_parts(whole, frac);
    TimeTag {
        raw,
        native: ntp_to_millis(raw),
    }
}

pub fn read_time_tag(reader: &mut Reader<'_>) -> Result<TimeTag> {
    let seconds = reader.read_uint32()?;
    let fraction = reader.read_uint32()?;
    Ok(from_raw(NtpTime { seconds, fraction }))
}

pub fn write_time_tag(tag: &TimeTag) -> [u8; 8] {
    write_ntp(tag.raw)
}

/// Write a time tag given only as Unix milliseconds.
pub fn write_millis(millis: f64) -> [u8; 8] {
    write_ntp(millis_to_ntp(millis))
}

fn write_ntp(raw: NtpTime) -> [u8; 8] {
    let mut out = [0u8; 8];
    out[..4].copy_from_slice(&write_uint32(raw.seconds));
    out[4..].copy_from_slice(&write_uint32(raw.fraction));
    out
}
