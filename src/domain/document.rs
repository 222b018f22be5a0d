//! National-ID document validation
//!
//! Weighted check-digit verification for the document numbers accepted on
//! user registration. The number may arrive formatted ("11.222.333/0001-81")
//! or as a bare digit string; separators are stripped before checking.

/// Repeated-digit strings that pass the arithmetic but are never issued.
const BLACKLIST: [&str; 10] = [
    "00000000000000",
    "11111111111111",
    "22222222222222",
    "33333333333333",
    "44444444444444",
    "55555555555555",
    "66666666666666",
    "77777777777777",
    "88888888888888",
    "99999999999999",
];

/// Validate a document number.
///
/// Strips `.`, `-` and `/`, requires exactly 14 remaining characters,
/// rejects the repeated-digit blacklist and runs both weighted check-digit
/// passes. Pure and deterministic.
pub fn is_valid(document: &str) -> bool {
    let data = sanitize(document);

    if data.len() != 14 {
        return false;
    }

    if BLACKLIST.contains(&data.as_str()) {
        return false;
    }

    check(&data)
}

fn sanitize(data: &str) -> String {
    data.chars().filter(|c| !matches!(c, '.' | '-' | '/')).collect()
}

/// Convert to a digit sequence. Non-digit characters are skipped, not
/// rejected; a shortened sequence then fails the positional checks below.
fn to_digits(data: &str) -> Vec<u32> {
    data.chars().filter_map(|c| c.to_digit(10)).collect()
}

fn check(data: &str) -> bool {
    let digits = to_digits(data);
    verify(&digits, 5, 12) && verify(&digits, 6, 13)
}

/// One weighted pass: weights start at `weight`, decrement each position and
/// wrap from 2 back to 9, over the first `n` digits. The check digit at
/// position `n` must equal 0 when sum mod 11 < 2, else 11 - (sum mod 11).
fn verify(digits: &[u32], weight: u32, n: usize) -> bool {
    let Some(&check_digit) = digits.get(n) else {
        return false;
    };

    let mut weight = weight;
    let mut sum = 0u32;
    for &digit in digits.iter().take(n) {
        sum += digit * weight;
        weight = if weight == 2 { 9 } else { weight - 1 };
    }

    let remainder = sum % 11;
    let expected = if remainder < 2 { 0 } else { 11 - remainder };

    check_digit == expected
}
