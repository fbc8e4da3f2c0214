//! Integer and float to decimal text, without `core::fmt`.
//!
//! These return owned fixed-capacity strings rather than sharing a static
//! scratch buffer, so interleaved conversions can never alias each other.

use heapless::String;

/// Largest `u64`/`i64` rendering is 20 bytes ("-9223372036854775808").
pub type IntString = String<20>;

/// Integer part, decimal point and the requested fractional digits;
/// digits past the capacity are dropped.
pub type FloatString = String<64>;

pub fn format_u64(mut value: u64) -> IntString {
    let mut buf = [0u8; 20];
    let mut pos = buf.len();
    loop {
        pos -= 1;
        buf[pos] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    let mut out = IntString::new();
    for &digit in &buf[pos..] {
        let _ = out.push(digit as char);
    }
    out
}

pub fn format_i64(value: i64) -> IntString {
    let mut out = IntString::new();
    if value < 0 {
        let _ = out.push('-');
    }
    let _ = out.push_str(&format_u64(value.unsigned_abs()));
    out
}

/// Fixed-decimal rendering. The fractional part is produced by repeated
/// multiply-by-10 on the remainder, so rounding error accumulates as the
/// decimal count grows; that drift is accepted, not corrected.
pub fn format_f64(value: f64, decimals: u8) -> FloatString {
    let mut out = FloatString::new();
    let _ = out.push_str(&format_i64(value as i64));
    if decimals == 0 {
        return out;
    }

    let mut frac = if value < 0.0 { -value } else { value };
    frac -= frac as u64 as f64;

    let _ = out.push('.');
    for _ in 0..decimals {
        frac *= 10.0;
        let digit = (frac as u64) % 10;
        let _ = out.push((b'0' + digit as u8) as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_digits() {
        assert_eq!(format_u64(0).as_str(), "0");
        assert_eq!(format_u64(255).as_str(), "255");
        assert_eq!(format_u64(1_048_576).as_str(), "1048576");
        assert_eq!(format_u64(u64::MAX).as_str(), "18446744073709551615");
    }

    #[test]
    fn signed_digits() {
        assert_eq!(format_i64(0).as_str(), "0");
        assert_eq!(format_i64(-42).as_str(), "-42");
        assert_eq!(format_i64(255).as_str(), "255");
        assert_eq!(format_i64(i64::MIN).as_str(), "-9223372036854775808");
    }

    #[test]
    fn fixed_decimals() {
        assert_eq!(format_f64(0.0, 0).as_str(), "0");
        assert_eq!(format_f64(3.25, 2).as_str(), "3.25");
        assert_eq!(format_f64(-1.5, 1).as_str(), "-1.5");
        assert_eq!(format_f64(2.0, 3).as_str(), "2.000");
    }

    #[test]
    fn conversions_do_not_alias() {
        let a = format_u64(111);
        let b = format_u64(999);
        assert_eq!(a.as_str(), "111");
        assert_eq!(b.as_str(), "999");
    }
}
