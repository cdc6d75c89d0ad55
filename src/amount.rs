//! Conversion of the textual `major[,.]minor` amount into signed cents.

/// Leading-integer conversion: optional whitespace, optional sign, then digits.
/// Anything that is not a number yields 0, trailing garbage is ignored.
pub fn leading_int(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });

    if negative { -value } else { value }
}

/// Joins the major and minor parts into cents.
///
/// The sign lives in `major` only: the minor part is added for a non-negative
/// major and subtracted for a negative one. A major of `-0` therefore reads as
/// positive, so `-0.50` comes out as +50 cents.
pub fn cents_from_parts(major: &str, minor: &str) -> i64 {
    let total = leading_int(major).saturating_mul(100);
    let minor = leading_int(minor);
    if total >= 0 {
        total.saturating_add(minor)
    } else {
        total.saturating_sub(minor)
    }
}
