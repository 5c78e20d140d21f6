//! FILENAME: core/engine/src/contact.rs
//! PURPOSE: The normalized output record shared by every input layout.

/// Header row of the combined output, in column order.
pub const OUTPUT_HEADERS: [&str; 3] = ["Name", "Email", "Phone Number"];

/// Zero-based column of the phone number in the output sheet.
pub const PHONE_COLUMN: u16 = 2;

/// One normalized contact. The phone number is always text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRow {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactRow {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        ContactRow {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Cell values in `OUTPUT_HEADERS` order.
    pub fn fields(&self) -> [&str; 3] {
        [&self.name, &self.email, &self.phone]
    }
}
