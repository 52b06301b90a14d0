//! Number-to-text conversion for JavaScript numeric literals.
//!
//! Rendering never consults the C locale: `core::fmt` always uses `.` as the
//! decimal separator and never groups digits, so output is identical no matter
//! what `LC_NUMERIC` the host process runs under. The shape of the output
//! follows `Number.prototype.toString()`.

use std::fmt::Write;

/// Render an integer as a JavaScript numeric literal.
pub fn format_int(value: i64) -> String {
    let mut out = String::new();
    push_int(&mut out, value);
    out
}

/// Render a float as a JavaScript numeric literal.
///
/// - `NaN`, `Infinity` and `-Infinity` are written as the global identifiers
/// - integral values drop the fractional part (`1.0` → `1`)
/// - magnitudes outside `[1e-6, 1e21)` use exponent form with an explicit
///   exponent sign (`1e+21`, `1.5e-7`)
/// - negative zero stays `-0` so the literal evaluates to the same value
pub fn format_float(value: f64) -> String {
    let mut out = String::new();
    push_float(&mut out, value);
    out
}

/// Append the literal text of `value` to `out`.
pub fn push_int(out: &mut String, value: i64) {
    let _ = write!(out, "{value}");
}

/// Append the literal text of `value` to `out`.
pub fn push_float(out: &mut String, value: f64) {
    if value.is_nan() {
        out.push_str("NaN");
        return;
    }
    if value.is_infinite() {
        out.push_str(if value.is_sign_negative() {
            "-Infinity"
        } else {
            "Infinity"
        });
        return;
    }
    if value == 0.0 {
        out.push_str(if value.is_sign_negative() { "-0" } else { "0" });
        return;
    }

    let abs = value.abs();
    if (1e-6..1e21).contains(&abs) {
        // Display is the shortest round-trip form and never emits an exponent.
        let _ = write!(out, "{value}");
        return;
    }

    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            out.push_str(mantissa);
            out.push('e');
            out.push(sign);
            out.push_str(digits);
        }
        None => out.push_str(&formatted),
    }
}

#[cfg(test)]
#[path = "../tests/numeric.rs"]
mod tests;
