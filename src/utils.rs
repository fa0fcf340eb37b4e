use lazy_static::lazy_static;
use regex::Regex;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

// Validate a Solana transaction signature string
pub fn validate_transaction_signature(signature: &str) -> bool {
    lazy_static! {
        // Base58 alphabet, 87-88 characters for a Solana signature
        static ref SIGNATURE_RE: Regex = Regex::new(r"^[1-9A-HJ-NP-Za-km-z]{87,88}$").unwrap();
    }

    SIGNATURE_RE.is_match(signature)
}

// Validate Solana address
pub fn validate_solana_address(address: &str) -> bool {
    Pubkey::from_str(address).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_signatures() {
        let signature = "67fgRfYqkxDdbHvrGkddGsNPHia159qgD9HVK9KYdX8cQVop8mnKbqUBQ9seWMfdBdNt3MGMjyD1Ac4tmaPHH2Qm";
        assert!(validate_transaction_signature(signature));
    }

    #[test]
    fn rejects_short_or_non_base58_input() {
        assert!(!validate_transaction_signature("abc"));
        assert!(!validate_transaction_signature(""));
        // 0, O, I and l are not in the base58 alphabet
        assert!(!validate_transaction_signature(&"0".repeat(88)));
    }

    #[test]
    fn validates_addresses() {
        assert!(validate_solana_address(
            "So11111111111111111111111111111111111111112"
        ));
        assert!(!validate_solana_address("not-an-address"));
    }
}
