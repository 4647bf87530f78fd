//! Input validation utilities

use regex::Regex;
use std::sync::OnceLock;

/// Validate a customer phone number
pub fn validate_phone(phone: &str) -> Result<(), String> {
    if phone.is_empty() {
        return Err("Phone number is required".to_string());
    }

    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = PHONE_REGEX
        .get_or_init(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone regex"));

    if !regex.is_match(phone) {
        return Err("Phone number must be exactly 10 digits".to_string());
    }

    Ok(())
}

/// Validate a one-time password
pub fn validate_otp(otp: &str) -> Result<(), String> {
    if otp.is_empty() {
        return Err("OTP is required".to_string());
    }

    static OTP_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex =
        OTP_REGEX.get_or_init(|| Regex::new(r"^[0-9]{4}$").expect("Failed to compile OTP regex"));

    if !regex.is_match(otp) {
        return Err("Please enter a valid 4-digit OTP".to_string());
    }

    Ok(())
}
