//! Number formatting for console output

/// `1234567` → `"1,234,567"`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Return rate rounded to one decimal, grouped, trailing `.0` dropped
pub fn format_rate(percent: f64) -> String {
    let tenths = (percent.max(0.0) * 10.0).round() as u64;
    let whole = group_thousands(tenths / 10);
    match tenths % 10 {
        0 => whole,
        frac => format!("{}.{}", whole, frac),
    }
}

/// `[1, 2, 3]`
pub fn format_numbers(numbers: &[u8]) -> String {
    let joined = numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}
