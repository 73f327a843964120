//! Console rendering of scores and grade lists

/// Renders `value` with `precision` fractional digits, rounding half up.
///
/// Rounding works on the shortest decimal form of the float, so `85.125`
/// becomes `85.13` and `1.005` becomes `1.01`.
pub fn score(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let text = value.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac = frac_part.as_bytes();

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain((0..precision).map(|i| frac.get(i).copied().unwrap_or(b'0')))
        .map(|b| b - b'0')
        .collect();
    let mut int_len = int_part.len();

    if frac.get(precision).is_some_and(|&d| d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
            int_len += 1;
        }
    }

    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 && digits.iter().any(|&d| d != 0) {
        out.push('-');
    }
    for (i, digit) in digits.iter().enumerate() {
        if i == int_len {
            out.push('.');
        }
        out.push(char::from(b'0' + digit));
    }
    out
}

/// Renders one grade: plain decimal inside `[1e-3, 1e7)`, `1.0E16` style outside it.
pub fn grade(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 || !value.is_finite() || (1e-3..1e7).contains(&magnitude) {
        return format!("{:?}", value);
    }
    let exp = format!("{:e}", value);
    match exp.split_once('e') {
        Some((mantissa, power)) if mantissa.contains('.') => format!("{}E{}", mantissa, power),
        Some((mantissa, power)) => format!("{}.0E{}", mantissa, power),
        None => exp,
    }
}

/// Renders grades as `[85.0, 90.5]`.
pub fn grade_list(grades: &[f64]) -> String {
    let items: Vec<String> = grades.iter().map(|&g| grade(g)).collect();
    format!("[{}]", items.join(", "))
}
