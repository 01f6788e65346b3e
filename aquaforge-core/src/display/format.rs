//! Number rendering for formula traces.
//!
//! The text produced here is shown to users verbatim, so it follows the
//! browser dashboard's conventions exactly: half-up fixed decimals,
//! Indonesian digit grouping (`33.750,5`) and `Infinity`/`NaN` spelled out.

/// Fixed-decimal rendering with ties rounded away from zero.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let body = round_half_up(value.abs(), digits);
    if value < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}

/// Shortest round-trip rendering of a plain number, as used for counts and
/// day numbers in traces.
pub fn plain(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // -0 prints as 0
    format!("{}", value + 0.0)
}

/// Total-biomass style: thousands grouped with `.`, at most two decimals after
/// a `,`. Zero and NaN render as `0`.
pub fn grouped(value: f64) -> String {
    if value == 0.0 || value.is_nan() {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    let fixed = round_half_up(value.abs(), 2);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value < 0.0 {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

/// Individual style: two fixed decimals. Zero and NaN render as `0.00`.
pub fn individual(value: f64) -> String {
    if value == 0.0 || value.is_nan() {
        return "0.00".to_string();
    }
    to_fixed(value, 2)
}

// Rounds a finite, non-negative value to `digits` decimals, ties up. Works on
// the long decimal expansion so that exact binary ties such as 0.125 round the
// same way regardless of how the platform formatter breaks them.
fn round_half_up(value: f64, digits: usize) -> String {
    let expanded = format!("{:.*}", digits + 20, value);
    let (int_part, frac_part) = expanded
        .split_once('.')
        .unwrap_or((expanded.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();
    let round_up = frac_part.as_bytes().get(digits).map_or(false, |d| *d >= b'5');

    if round_up {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    let mut out = String::from_utf8_lossy(&kept[..split]).into_owned();
    if digits > 0 {
        out.push('.');
        out.push_str(&String::from_utf8_lossy(&kept[split..]));
    }
    out
}
