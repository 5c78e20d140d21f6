//! FILENAME: core/engine/src/layout.rs
//! PURPOSE: The fixed column layouts a contact export can arrive in.
//! CONTEXT: A layout is chosen once per table from its header row. The split
//! name layout is checked first, so a sheet carrying both column sets is
//! always treated as a split name sheet.

use crate::table::InputTable;

pub const FIRST_NAME: &str = "First Name";
pub const LAST_NAME: &str = "Last Name";
pub const EMAIL_ADDRESS: &str = "Email Address";
pub const CELL_PHONE: &str = "Cell Phone";

pub const BUYER_NAME: &str = "Buyer Name";
pub const BUYER_EMAIL: &str = "Buyer Email";
pub const BUYER_CONTACT: &str = "Buyer Contact";
pub const FULL_NAME: &str = "FULL NAME";
pub const ATTENDEE_EMAIL: &str = "E-MAIL ADDRESS";
pub const MOBILE_NUMBER: &str = "MOBILE NUMBER";

/// Columns required by the first/last name export.
pub const SPLIT_NAME_COLUMNS: [&str; 4] = [FIRST_NAME, LAST_NAME, EMAIL_ADDRESS, CELL_PHONE];

/// Columns required by the buyer + attendee export.
pub const BUYER_ATTENDEE_COLUMNS: [&str; 6] = [
    BUYER_NAME,
    BUYER_EMAIL,
    BUYER_CONTACT,
    FULL_NAME,
    ATTENDEE_EMAIL,
    MOBILE_NUMBER,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// First Name / Last Name / Email Address / Cell Phone.
    /// One contact per input row.
    SplitName,
    /// Buyer Name / Buyer Email / Buyer Contact plus
    /// FULL NAME / E-MAIL ADDRESS / MOBILE NUMBER.
    /// Two contacts per input row.
    BuyerAttendee,
}

impl Layout {
    pub fn detect(table: &InputTable) -> Option<Layout> {
        if table.has_columns(&SPLIT_NAME_COLUMNS) {
            Some(Layout::SplitName)
        } else if table.has_columns(&BUYER_ATTENDEE_COLUMNS) {
            Some(Layout::BuyerAttendee)
        } else {
            None
        }
    }

    /// Number of output contacts produced per input row.
    pub fn rows_per_record(self) -> usize {
        match self {
            Layout::SplitName => 1,
            Layout::BuyerAttendee => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Layout::SplitName => "split-name",
            Layout::BuyerAttendee => "buyer-attendee",
        }
    }
}
