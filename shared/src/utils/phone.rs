//! Phone number utilities

/// Remove common formatting characters, keeping digits and `+`
pub fn strip_formatting(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Keep only the ASCII digits of a phone number
pub fn digits_only(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Mask a phone number for logging (e.g., +90****2233)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = strip_formatting(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}
