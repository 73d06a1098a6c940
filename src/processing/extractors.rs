// Field extraction from raw front/back OCR text
use crate::models::{ExtractionReport, Field, Gender, ParsedFields};
use crate::processing::patterns::{
    ADDRESS_LATIN_LABEL, ADDRESS_NATIVE_LABEL, BACK_UID_PREFIX, DOB_LATIN, DOB_NATIVE,
    FEMALE_WORD, GENDER_LABEL, GENDER_WORD, NAME_LABEL, PINCODE, UID_STANDALONE,
};
use crate::utils::{format_uid, strip_uid};
use regex::Regex;

/// Both sides of the card plus the values resolved so far.
/// Later strategies (name, back UID) depend on earlier results.
struct CardText<'a> {
    front: &'a str,
    back: &'a str,
    front_lines: Vec<&'a str>,
    back_joined: String,
    dob: String,
    uid_front: String,
}

/// A named way of reading one field. Strategies are tried in order.
struct Strategy<T> {
    name: &'static str,
    run: fn(&CardText<'_>) -> Option<T>,
}

const DOB_STRATEGIES: &[Strategy<String>] = &[
    Strategy { name: "latin_label", run: dob_latin_label },
    Strategy { name: "native_label", run: dob_native_label },
];

const NAME_STRATEGIES: &[Strategy<String>] = &[
    Strategy { name: "name_label", run: name_label },
    Strategy { name: "line_above_dob", run: name_above_dob },
];

const GENDER_STRATEGIES: &[Strategy<Gender>] = &[
    Strategy { name: "gender_label", run: gender_label },
    Strategy { name: "gender_line", run: gender_line },
];

const UID_FRONT_STRATEGIES: &[Strategy<String>] = &[
    Strategy { name: "grouped_digits", run: uid_front_grouped },
];

const UID_BACK_STRATEGIES: &[Strategy<String>] = &[
    Strategy { name: "prefix_window", run: uid_back_prefixed },
];

const ADDRESS_STRATEGIES: &[Strategy<String>] = &[
    Strategy { name: "latin_label", run: address_latin_label },
    Strategy { name: "native_label", run: address_native_label },
    Strategy { name: "unlabelled", run: address_unlabelled },
];

pub struct FieldExtractor;

impl FieldExtractor {
    /// Extract every field. Never fails; missing fields come back empty.
    pub fn extract(front_text: &str, back_text: &str) -> ParsedFields {
        Self::extract_with_report(front_text, back_text).0
    }

    /// Like [`FieldExtractor::extract`], also reporting which strategy produced each field.
    pub fn extract_with_report(front_text: &str, back_text: &str) -> (ParsedFields, ExtractionReport) {
        let mut report = ExtractionReport::default();
        let mut text = CardText {
            front: front_text,
            back: back_text,
            front_lines: non_empty_lines(front_text),
            back_joined: non_empty_lines(back_text).join(" "),
            dob: String::new(),
            uid_front: String::new(),
        };

        text.dob = resolve(Field::Dob, DOB_STRATEGIES, &text, &mut report).unwrap_or_default();
        text.uid_front =
            resolve(Field::IdentifierFront, UID_FRONT_STRATEGIES, &text, &mut report).unwrap_or_default();

        let name = resolve(Field::Name, NAME_STRATEGIES, &text, &mut report).unwrap_or_default();
        let gender = resolve(Field::Gender, GENDER_STRATEGIES, &text, &mut report).unwrap_or(Gender::Unknown);
        let uid_back =
            resolve(Field::IdentifierBack, UID_BACK_STRATEGIES, &text, &mut report).unwrap_or_default();
        let address = resolve(Field::Address, ADDRESS_STRATEGIES, &text, &mut report).unwrap_or_default();
        let (address, pincode) = split_at_pincode(address);

        let fields = ParsedFields {
            name,
            dob: text.dob,
            gender,
            identifier_front: format_uid(&text.uid_front),
            identifier_back: format_uid(&uid_back),
            address,
            pincode,
        };
        (fields, report)
    }
}

fn resolve<T>(
    field: Field,
    strategies: &[Strategy<T>],
    text: &CardText<'_>,
    report: &mut ExtractionReport,
) -> Option<T> {
    strategies.iter().find_map(|strategy| {
        let value = (strategy.run)(text)?;
        report.record(field, strategy.name);
        Some(value)
    })
}

fn non_empty_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

fn first_capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn dob_latin_label(text: &CardText<'_>) -> Option<String> {
    first_capture(&DOB_LATIN, text.front)
}

fn dob_native_label(text: &CardText<'_>) -> Option<String> {
    first_capture(&DOB_NATIVE, text.front)
}

fn name_label(text: &CardText<'_>) -> Option<String> {
    let name = first_capture(&NAME_LABEL, text.front)?;
    let name = name.trim();
    if name.len() >= 3 {
        Some(name.to_string())
    } else {
        None
    }
}

// The printed name sits directly above the date-of-birth line
fn name_above_dob(text: &CardText<'_>) -> Option<String> {
    if text.dob.is_empty() {
        return None;
    }
    let dob_line = text
        .front_lines
        .iter()
        .position(|line| line.contains(text.dob.as_str()))?;
    let candidate = text.front_lines.get(dob_line.checked_sub(1)?)?;
    if GENDER_WORD.is_match(candidate) || UID_STANDALONE.is_match(candidate) {
        return None;
    }
    Some(candidate.to_string())
}

fn gender_from_word(word: &str) -> Gender {
    if FEMALE_WORD.is_match(word) {
        Gender::Female
    } else {
        Gender::Male
    }
}

fn gender_label(text: &CardText<'_>) -> Option<Gender> {
    first_capture(&GENDER_LABEL, text.front).map(|word| gender_from_word(&word))
}

fn gender_line(text: &CardText<'_>) -> Option<Gender> {
    text.front_lines
        .iter()
        .find(|line| GENDER_WORD.is_match(line))
        .map(|line| gender_from_word(line))
}

fn uid_front_grouped(text: &CardText<'_>) -> Option<String> {
    let mut from = 0;
    while let Some(m) = UID_STANDALONE.find_at(text.front, from) {
        if !joins_digit_group(&text.front[..m.start()], &text.front[m.end()..]) {
            return Some(strip_uid(m.as_str()));
        }
        // Matches start on an ASCII digit, so one byte on is a char boundary
        from = m.start() + 1;
    }
    None
}

// A 12-digit match that runs on into another digit group on the same line is
// part of a longer number, such as the 16-digit VID printed on newer cards.
fn joins_digit_group(before: &str, after: &str) -> bool {
    let is_gap = |c: char| c == ' ' || c == '\t';
    let mut tail = after.chars();
    let next = match tail.next() {
        Some(c) if is_gap(c) => tail.next(),
        other => other,
    };
    let mut head = before.chars().rev();
    let prev = match head.next() {
        Some(c) if is_gap(c) => head.next(),
        other => other,
    };
    next.map_or(false, |c| c.is_ascii_digit()) || prev.map_or(false, |c| c.is_ascii_digit())
}

/// Every 12-digit run that follows the fixed prefix in the back text's digit stream.
fn prefixed_candidates(back: &str) -> Vec<String> {
    let digits = strip_uid(back);
    digits
        .as_bytes()
        .windows(BACK_UID_PREFIX.len() + 12)
        .filter(|window| window.starts_with(BACK_UID_PREFIX.as_bytes()))
        .filter_map(|window| std::str::from_utf8(&window[BACK_UID_PREFIX.len()..]).ok())
        .map(str::to_string)
        .collect()
}

fn uid_back_prefixed(text: &CardText<'_>) -> Option<String> {
    let candidates = prefixed_candidates(text.back);
    candidates
        .iter()
        .find(|candidate| **candidate == text.uid_front)
        .or_else(|| candidates.first())
        .cloned()
}

fn strip_through_label(label: &Regex, joined: &str) -> Option<String> {
    let found = label.find(joined)?;
    Some(joined[found.end()..].trim().to_string())
}

fn address_latin_label(text: &CardText<'_>) -> Option<String> {
    strip_through_label(&ADDRESS_LATIN_LABEL, &text.back_joined)
}

fn address_native_label(text: &CardText<'_>) -> Option<String> {
    strip_through_label(&ADDRESS_NATIVE_LABEL, &text.back_joined)
}

fn address_unlabelled(text: &CardText<'_>) -> Option<String> {
    Some(text.back_joined.trim().to_string())
}

// Anything printed after the PIN code is card footer, not address
fn split_at_pincode(address: String) -> (String, String) {
    match PINCODE.find(&address) {
        Some(pin) => (
            address[..pin.end()].trim().to_string(),
            pin.as_str().to_string(),
        ),
        None => (address, String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRONT: &str = "Government of India\n\
        राजेश कुमार\n\
        RAJESH KUMAR\n\
        जन्म तिथि/DOB: 15/03/1985\n\
        पुरुष / MALE\n\
        2345 6789 0124\n\
        Aadhaar - Aam Aadmi ka Adhikar";

    const BACK: &str = "Unique Identification Authority of India\n\
        पता: S/O Mohan Kumar, House 12\n\
        Address: S/O Mohan Kumar, House 12,\n\
        Sector 9, New Delhi - 110001\n\
        1947 2345 6789 0124\n\
        help@uidai.gov.in www.uidai.gov.in";

    #[test]
    fn test_extract_full_card() {
        let (fields, report) = FieldExtractor::extract_with_report(FRONT, BACK);

        assert_eq!(fields.name, "RAJESH KUMAR");
        assert_eq!(fields.dob, "15/03/1985");
        assert_eq!(fields.gender, Gender::Male);
        assert_eq!(fields.identifier_front, "2345 6789 0124");
        assert_eq!(fields.identifier_back, "2345 6789 0124");
        assert_eq!(fields.address, "S/O Mohan Kumar, House 12, Sector 9, New Delhi - 110001");
        assert_eq!(fields.pincode, "110001");

        assert_eq!(report.strategy_for(Field::Dob), Some("latin_label"));
        assert_eq!(report.strategy_for(Field::Name), Some("line_above_dob"));
        assert_eq!(report.strategy_for(Field::Gender), Some("gender_line"));
        assert_eq!(report.strategy_for(Field::Address), Some("latin_label"));
    }

    #[test]
    fn test_name_is_line_above_dob() {
        let fields = FieldExtractor::extract("RAJESH KUMAR\nDOB: 15/03/1985\nMALE", "");
        assert_eq!(fields.name, "RAJESH KUMAR");
        assert_eq!(fields.dob, "15/03/1985");
    }

    #[test]
    fn test_name_label_takes_priority() {
        let (fields, report) =
            FieldExtractor::extract_with_report("Name: Priya Sharma\nFemale\nDOB: 02/11/1999", "");
        assert_eq!(fields.name, "Priya Sharma");
        assert_eq!(report.strategy_for(Field::Name), Some("name_label"));
    }

    #[test]
    fn test_name_rejects_gender_or_number_line() {
        let fields = FieldExtractor::extract("FEMALE\nDOB: 02/11/1999", "");
        assert_eq!(fields.name, "");

        let fields = FieldExtractor::extract("2345 6789 0124\nDOB: 02/11/1999", "");
        assert_eq!(fields.name, "");
    }

    #[test]
    fn test_missing_dob_leaves_name_empty() {
        let fields = FieldExtractor::extract("RAJESH KUMAR\nYear of Birth 1985\nMALE", "");
        assert_eq!(fields.dob, "");
        assert_eq!(fields.name, "");
    }

    #[test]
    fn test_native_dob_label() {
        let (fields, report) = FieldExtractor::extract_with_report("सुनीता देवी\nजन्म तिथि: 01/01/1960", "");
        assert_eq!(fields.dob, "01/01/1960");
        assert_eq!(fields.name, "सुनीता देवी");
        assert_eq!(report.strategy_for(Field::Dob), Some("native_label"));
    }

    #[test]
    fn test_gender() {
        assert_eq!(FieldExtractor::extract("Gender: Female", "").gender, Gender::Female);
        assert_eq!(FieldExtractor::extract("महिला / FEMALE", "").gender, Gender::Female);
        assert_eq!(FieldExtractor::extract("पुरुष / MALE", "").gender, Gender::Male);
        assert_eq!(FieldExtractor::extract("no marker here", "").gender, Gender::Unknown);
    }

    #[test]
    fn test_front_uid_needs_twelve_digits() {
        let fields = FieldExtractor::extract("VID 1234 5678 9012 3456\n2345 67890124", "");
        assert_eq!(fields.identifier_front, "2345 6789 0124");

        let fields = FieldExtractor::extract("1234 5678", "");
        assert_eq!(fields.identifier_front, "");
    }

    #[test]
    fn test_front_uid_skips_longer_digit_groups() {
        let fields = FieldExtractor::extract("VID: 9182 7364 5049 1234
2345 6789 0124", "");
        assert_eq!(fields.identifier_front, "2345 6789 0124");

        let fields = FieldExtractor::extract("1111 2222 3333 4444 5555 6666", "");
        assert_eq!(fields.identifier_front, "");
    }

    #[test]
    fn test_name_containing_gender_substring() {
        let front = "KOMALESHWARI DEVI\nDOB: 02/11/1990\nमहिला / FEMALE";
        let fields = FieldExtractor::extract(front, "");
        assert_eq!(fields.name, "KOMALESHWARI DEVI");
        assert_eq!(fields.gender, Gender::Female);
    }

    #[test]
    fn test_back_uid_prefers_front_match() {
        let back = "1947 9876 5432 1012\n1947 2345 6789 0124";
        let fields = FieldExtractor::extract("2345 6789 0124", back);
        assert_eq!(fields.identifier_back, "2345 6789 0124");

        let fields = FieldExtractor::extract("", back);
        assert_eq!(fields.identifier_back, "9876 5432 1012");
    }

    #[test]
    fn test_back_uid_requires_prefix() {
        let fields = FieldExtractor::extract("", "2345 6789 0124");
        assert_eq!(fields.identifier_back, "");
        assert!(prefixed_candidates("x1947-23456789012y").is_empty());
        assert_eq!(prefixed_candidates("19472345678901245"), vec!["234567890124"]);
    }

    #[test]
    fn test_address_truncated_after_pincode() {
        let back = "UIDAI header ... Address: House 12, Sector 9, City - 110001 FOOTERTEXT";
        let fields = FieldExtractor::extract("", back);
        assert_eq!(fields.pincode, "110001");
        assert_eq!(fields.address, "House 12, Sector 9, City - 110001");
    }

    #[test]
    fn test_address_without_pincode() {
        let (fields, report) = FieldExtractor::extract_with_report("", "Ward 4\n  Main Road  \n\nVillage");
        assert_eq!(fields.address, "Ward 4 Main Road Village");
        assert_eq!(fields.pincode, "");
        assert_eq!(report.strategy_for(Field::Address), Some("unlabelled"));
    }

    #[test]
    fn test_empty_input() {
        let fields = FieldExtractor::extract("", "");
        assert_eq!(fields, ParsedFields::default());
    }
}
