use log::Level;

pub const BUSINESS_NAME: &str = "Raza Electrical Services";
pub const SHORT_NAME: &str = "Raza Electricals";
pub const PHONE_NUMBER: &str = "+919771303958";
pub const WHATSAPP_GREETING: &str = "Hello Raza Electricals, I need a service.";
pub const LOCATION: &str = "Patna, Bihar";
pub const HOURS: &str = "Mon - Sat: 9am - 8pm";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
