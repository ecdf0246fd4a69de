use crate::config;

pub fn tel_link(phone: &str) -> String {
    format!("tel:{}", phone)
}

/// Digits only, the form wa.me expects.
pub fn sanitize_phone(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn whatsapp_link(phone: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        sanitize_phone(phone),
        urlencoding::encode(message)
    )
}

pub fn call_link() -> String {
    tel_link(config::PHONE_NUMBER)
}

pub fn chat_link() -> String {
    whatsapp_link(config::PHONE_NUMBER, config::WHATSAPP_GREETING)
}
