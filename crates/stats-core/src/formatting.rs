/// Bytes in one gibibyte (1024³).
pub const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Convert a byte count to gibibytes.
///
/// The integer is rounded to `f64` once and then divided by a power of two,
/// which is exact, so the result is the correctly rounded quotient.
///
/// # Examples
///
/// ```
/// use stats_core::formatting::bytes_to_gib;
///
/// assert_eq!(bytes_to_gib(1_073_741_824), 1.0);
/// assert_eq!(bytes_to_gib(536_870_912), 0.5);
/// assert_eq!(bytes_to_gib(0), 0.0);
/// ```
pub fn bytes_to_gib(bytes: i128) -> f64 {
    bytes as f64 / BYTES_PER_GIB
}

/// Render a float as its shortest round-tripping decimal form.
///
/// Magnitudes in `[1e-4, 1e16)` (and zero) use positional notation and
/// always carry a decimal point; everything else uses an exponent with an
/// explicit sign and at least two digits.
///
/// # Examples
///
/// ```
/// use stats_core::formatting::format_float;
///
/// assert_eq!(format_float(1.0), "1.0");
/// assert_eq!(format_float(0.0), "0.0");
/// assert_eq!(format_float(0.1), "0.1");
/// assert_eq!(format_float(1e16), "1e+16");
/// assert_eq!(format_float(1.5e-5), "1.5e-05");
/// ```
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let abs_value = value.abs();
    if abs_value == 0.0 || (1e-4..1e16).contains(&abs_value) {
        let positional = value.to_string();
        return if positional.contains('.') {
            positional
        } else {
            format!("{}.0", positional)
        };
    }

    // `{:e}` yields e.g. "1.5e-5"; widen the exponent to "e-05".
    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => scientific,
    }
}
