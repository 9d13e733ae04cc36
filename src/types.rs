use crate::errors::{Error, Result};

/// Return a 'minimal' representation of the given number.
///
/// Integers have no decimal point, there are no trailing zeros and negative
/// zero is rendered as `0`. The shortest representation which parses back to
/// exactly `x` is used, so values survive a round trip through text.
pub fn fstr(x: f64) -> String {
    if x == 0. {
        // covers -0.0 as well
        return "0".to_string();
    }
    format!("{x}")
}

/// Parse a string to an f64
pub fn strp(s: &str) -> Result<f64> {
    let s = s.trim();
    let value: f64 = s.parse()?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidValue("number".to_string(), s.to_string()))
    }
}
