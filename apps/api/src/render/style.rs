//! Typography and page geometry shared by both documents.

/// Every run uses this family.
pub const FONT_FAMILY: &str = "Times New Roman";

pub const TITLE_SIZE_PT: u8 = 16;
pub const SECTION_HEADER_SIZE_PT: u8 = 12;
pub const BODY_SIZE_PT: u8 = 12;
pub const CONTACT_SIZE_PT: u8 = 11;

pub const SECTION_SPACE_BEFORE_PT: f32 = 6.0;
pub const SECTION_SPACE_AFTER_PT: f32 = 2.0;

/// Narrow margins keep the résumé on a single page.
pub const RESUME_MARGIN_IN: f32 = 0.5;
pub const COVER_LETTER_MARGIN_IN: f32 = 1.0;

/// Right edge of the text block on US letter with résumé margins.
pub const LOCATION_TAB_STOP_IN: f32 = 7.5;

pub const TWIPS_PER_INCH: f32 = 1440.0;
pub const TWIPS_PER_POINT: f32 = 20.0;
