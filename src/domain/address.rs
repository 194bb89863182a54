//! Parsing and canonical rendering of 20-byte contract addresses.
//!
//! Every address entering the SDK goes through [`validate_and_parse_address`],
//! so equality, ordering and hashing always operate on the same bytes no
//! matter how the caller cased the input. The canonical text form is the
//! EIP-55 mixed-case checksum.

use core::str::FromStr;

use alloy_primitives::Address;

use crate::error::{Result, SdkError};

const ADDRESS_HEX_LEN: usize = 40;

/// Parses a hex address, enforcing the EIP-55 checksum on mixed-case input.
///
/// Accepted forms: an optional `0x` prefix followed by exactly 40 hex
/// digits. All-lowercase and all-uppercase digits are taken as-is;
/// mixed case must be a valid checksum.
///
/// # Errors
///
/// Returns [`SdkError::Parse`] on a wrong length, a non-hex digit, or a
/// mixed-case string whose checksum does not verify.
///
/// # Examples
///
/// ```
/// use pairswap_sdk::domain::validate_and_parse_address;
///
/// let a = validate_and_parse_address("0x5b1869D9A4C187F2EAa108f3062412ecf0526b24").expect("valid");
/// let b = validate_and_parse_address("0x5b1869d9a4c187f2eaa108f3062412ecf0526b24").expect("valid");
/// assert_eq!(a, b);
/// ```
pub fn validate_and_parse_address(input: &str) -> Result<Address> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);

    if digits.len() != ADDRESS_HEX_LEN {
        return Err(SdkError::Parse("address must be 20 bytes of hex"));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(SdkError::Parse("address contains a non-hex digit"));
    }

    let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Address::parse_checksummed(format!("0x{digits}"), None)
            .map_err(|_| SdkError::Parse("address checksum mismatch"));
    }

    Address::from_str(digits).map_err(|_| SdkError::Parse("address is not valid hex"))
}

/// Renders an address in its canonical EIP-55 checksum form.
#[must_use]
pub fn to_checksum(address: &Address) -> String {
    address.to_checksum(None)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const DCA: &str = "0x5b1869D9A4C187F2EAa108f3062412ecf0526b24";

    #[test]
    fn checksummed_round_trip() {
        let Ok(addr) = validate_and_parse_address(DCA) else {
            panic!("expected Ok");
        };
        assert_eq!(to_checksum(&addr), DCA);
    }

    #[test]
    fn lowercase_and_uppercase_normalize() {
        let lower = DCA.to_lowercase();
        let upper = format!("0x{}", DCA[2..].to_uppercase());
        let (Ok(a), Ok(b), Ok(c)) = (
            validate_and_parse_address(DCA),
            validate_and_parse_address(&lower),
            validate_and_parse_address(&upper),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(to_checksum(&b), DCA);
    }

    #[test]
    fn prefix_is_optional() {
        let Ok(addr) = validate_and_parse_address(&DCA[2..]) else {
            panic!("expected Ok");
        };
        assert_eq!(to_checksum(&addr), DCA);
    }

    #[test]
    fn rejects_bad_checksum() {
        // flip the case of one checksummed letter
        let bad = DCA.replacen("D9A4", "d9A4", 1);
        assert_eq!(
            validate_and_parse_address(&bad),
            Err(SdkError::Parse("address checksum mismatch"))
        );
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            validate_and_parse_address("0x1234"),
            Err(SdkError::Parse("address must be 20 bytes of hex"))
        );
    }

    #[test]
    fn rejects_non_hex() {
        let bad = format!("0x{}", "g".repeat(40));
        assert_eq!(
            validate_and_parse_address(&bad),
            Err(SdkError::Parse("address contains a non-hex digit"))
        );
    }
}
