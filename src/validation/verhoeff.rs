// Verhoeff checksum, the check digit scheme used for Aadhaar numbers

const MULTIPLICATION: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

const PERMUTATION: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 8, 3, 2, 1, 7, 6, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Format/checksum rule applied to the canonical identifier.
pub trait IdentifierValidator: Send + Sync {
    fn is_valid(&self, digits: &str) -> bool;
}

/// Twelve digits, not starting with 0 or 1, with a valid Verhoeff check digit.
pub struct VerhoeffValidator;

impl IdentifierValidator for VerhoeffValidator {
    fn is_valid(&self, digits: &str) -> bool {
        digits.len() == 12
            && digits.bytes().all(|b| b.is_ascii_digit())
            && !matches!(digits.as_bytes()[0], b'0' | b'1')
            && verhoeff_check(digits)
    }
}

/// Whether the trailing digit is the correct Verhoeff check digit.
pub fn verhoeff_check(digits: &str) -> bool {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let checksum = digits
        .bytes()
        .rev()
        .enumerate()
        .fold(0u8, |check, (position, byte)| {
            let digit = (byte - b'0') as usize;
            MULTIPLICATION[check as usize][PERMUTATION[position % 8][digit] as usize]
        });
    checksum == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        let validator = VerhoeffValidator;
        assert!(validator.is_valid("234567890124"));
        assert!(validator.is_valid("491827364504"));
        assert!(validator.is_valid("987654321012"));
    }

    #[test]
    fn test_wrong_check_digit() {
        assert!(!VerhoeffValidator.is_valid("234567890125"));
        assert!(!verhoeff_check("123456789012"));
    }

    #[test]
    fn test_format_rules() {
        let validator = VerhoeffValidator;
        assert!(!validator.is_valid(""));
        assert!(!validator.is_valid("2345 6789 0124"));
        assert!(!validator.is_valid("23456789012"));
        // Aadhaar numbers never start with 0 or 1
        assert!(!validator.is_valid("000000000000"));
    }
}
