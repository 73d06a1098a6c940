// Pattern tables shared by the content validator and the field extractor
use lazy_static::lazy_static;
use regex::Regex;

/// Fixed prefix printed ahead of the UID in the back-side digit block.
pub const BACK_UID_PREFIX: &str = "1947";

lazy_static! {
    // Loose 4-4-4 digit grouping, used for scoring
    pub static ref UID_GROUPED: Regex = Regex::new(r"[0-9]{4}\s?[0-9]{4}\s?[0-9]{4}").unwrap();

    // Standalone 4-4-4 digit grouping, used for extraction
    pub static ref UID_STANDALONE: Regex = Regex::new(r"\b[0-9]{4}\s?[0-9]{4}\s?[0-9]{4}\b").unwrap();

    pub static ref DOB_LATIN: Regex = Regex::new(
        r"(?i)(?:DOB|Date\s+of\s+Birth)\s*[:\-]?\s*([0-9]{2}/[0-9]{2}/[0-9]{4})"
    ).unwrap();

    pub static ref DOB_NATIVE: Regex = Regex::new(
        r"जन्म\s*तिथि\s*[:\-]?\s*([0-9]{2}/[0-9]{2}/[0-9]{4})"
    ).unwrap();

    pub static ref NAME_LABEL: Regex = Regex::new(
        r"(?i)\bName\b[ \t]*[:\-]?[ \t]*([A-Za-z .]+)"
    ).unwrap();

    pub static ref GENDER_LABEL: Regex = Regex::new(
        r"(?i)\bGender\b\s*[:\-]?\s*(Male|Female)\b"
    ).unwrap();

    pub static ref GENDER_WORD: Regex = Regex::new(r"(?i)\b(?:fe)?male\b|पुरुष|महिला").unwrap();

    pub static ref FEMALE_WORD: Regex = Regex::new(r"(?i)\bfemale\b|महिला").unwrap();

    // Greedy so that everything up to the last label is dropped
    pub static ref ADDRESS_LATIN_LABEL: Regex = Regex::new(r"(?i)^.*Address\s*[:\-]?\s*").unwrap();

    pub static ref ADDRESS_NATIVE_LABEL: Regex = Regex::new(r"^.*पता\s*[:\-]?\s*").unwrap();

    pub static ref PINCODE: Regex = Regex::new(r"\b[0-9]{6}\b").unwrap();
}
