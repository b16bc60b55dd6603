//! Token mint address - Base58-encoded Solana public key

use crate::application::errors::AwakenError;

/// Byte width of an ed25519 public key, which is what a mint address decodes to.
pub const PUBKEY_BYTES: usize = 32;

/// A validated SPL token mint address.
///
/// Holds both the Base58 form the user typed and the decoded key bytes.
/// Construction is the only validation point: any `MintAddress` value is
/// guaranteed to be a well-formed 32-byte public key encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintAddress {
    encoded: String,
    bytes: [u8; PUBKEY_BYTES],
}

impl MintAddress {
    /// Parse a user-supplied string into a mint address.
    ///
    /// Fails if the string is empty, is not valid Base58, or decodes to
    /// anything other than 32 bytes.
    pub fn parse(raw: &str) -> Result<Self, AwakenError> {
        if raw.is_empty() {
            return Err(AwakenError::InvalidAddressFormat);
        }

        let decoded = bs58::decode(raw)
            .into_vec()
            .map_err(|_| AwakenError::InvalidAddressFormat)?;

        let bytes: [u8; PUBKEY_BYTES] = decoded
            .try_into()
            .map_err(|_| AwakenError::InvalidAddressFormat)?;

        Ok(Self {
            encoded: raw.to_string(),
            bytes,
        })
    }

    /// The Base58 form, exactly as the user supplied it.
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// The decoded public key bytes.
    pub fn bytes(&self) -> &[u8; PUBKEY_BYTES] {
        &self.bytes
    }

    /// Truncated display form: first 6 and last 4 characters.
    ///
    /// A valid 32-byte key encodes to 32-44 Base58 (ASCII) characters, so
    /// byte slicing is safe here.
    pub fn short(&self) -> String {
        let s = &self.encoded;
        format!("{}...{}", &s[..6], &s[s.len() - 4..])
    }
}

impl std::fmt::Display for MintAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WRAPPED_SOL: &str = "So11111111111111111111111111111111111111112";
    const SAMPLE_MINT: &str = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU";

    #[test]
    fn parses_well_formed_mint() {
        let addr = MintAddress::parse(SAMPLE_MINT).expect("should parse");
        assert_eq!(addr.encoded(), SAMPLE_MINT);
        assert_eq!(addr.bytes().len(), PUBKEY_BYTES);
    }

    #[test]
    fn parses_wrapped_sol_mint() {
        assert!(MintAddress::parse(WRAPPED_SOL).is_ok());
    }

    #[test]
    fn rejects_empty_string() {
        assert!(matches!(
            MintAddress::parse(""),
            Err(AwakenError::InvalidAddressFormat)
        ));
    }

    #[test]
    fn rejects_non_base58_characters() {
        // '0', 'O', 'I' and 'l' are not in the Base58 alphabet
        assert!(MintAddress::parse("0OIl0OIl0OIl0OIl0OIl0OIl0OIl0OIl").is_err());
    }

    #[test]
    fn rejects_wrong_decoded_length() {
        // Valid Base58 but far too short to be a 32-byte key
        assert!(matches!(
            MintAddress::parse("notanaddress"),
            Err(AwakenError::InvalidAddressFormat)
        ));
    }

    #[test]
    fn short_form_keeps_first_six_and_last_four() {
        let addr = MintAddress::parse(SAMPLE_MINT).unwrap();
        assert_eq!(addr.short(), "7xKXtg...gAsU");
    }
}
