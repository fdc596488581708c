/// Maximum number of digits accepted for a Brazilian phone (2 area + 9 local).
pub const MAX_DIGITS: usize = 11;

/// Country calling code prepended to numbers sent to the webhook.
pub const COUNTRY_CODE: &str = "55";

/// Strip every character that is not an ASCII digit.
pub fn digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Progressive display mask: `(11`, `(11) 9123`, `(11) 3232-4567`, `(11) 91234-5678`.
///
/// Returns `None` when the input carries more than [`MAX_DIGITS`] digits.
pub fn mask(raw: &str) -> Option<String> {
    let d = digits(raw);
    let n = d.len();
    if n > MAX_DIGITS {
        return None;
    }
    if n == 0 {
        return Some(String::new());
    }
    if n <= 2 {
        return Some(format!("({d}"));
    }

    let (area, rest) = d.split_at(2);
    if rest.len() <= 4 {
        return Some(format!("({area}) {rest}"));
    }

    // The middle block only grows to 5 digits once the number is complete.
    let middle_len = if n == MAX_DIGITS { 5 } else { 4 };
    let (middle, last) = rest.split_at(middle_len);
    Some(format!("({area}) {middle}-{last}"))
}

/// Apply a keystroke-level update to a masked value.
///
/// Input that would exceed the digit cap is dropped silently and the previous
/// masked value is kept.
pub fn apply_input(previous: &str, raw: &str) -> String {
    mask(raw).unwrap_or_else(|| previous.to_string())
}

/// Webhook form of a masked number: country code followed by its digits.
pub fn for_webhook(formatted: &str) -> String {
    format!("{COUNTRY_CODE}{}", digits(formatted))
}
