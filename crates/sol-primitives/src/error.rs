use thiserror::Error;

/// Address and PDA derivation errors.
#[derive(Debug, Error)]
pub enum AddressError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("derived address falls on the ed25519 curve")]
    OnCurve,

    #[error("no valid bump seed found for the given seeds")]
    DerivationExhausted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_address() {
        let err = AddressError::InvalidAddress("base58 decode failed".into());
        assert_eq!(err.to_string(), "invalid address: base58 decode failed");
    }

    #[test]
    fn display_on_curve() {
        let err = AddressError::OnCurve;
        assert_eq!(
            err.to_string(),
            "derived address falls on the ed25519 curve"
        );
    }

    #[test]
    fn display_derivation_exhausted() {
        let err = AddressError::DerivationExhausted;
        assert_eq!(
            err.to_string(),
            "no valid bump seed found for the given seeds"
        );
    }

    #[test]
    fn error_trait_is_implemented() {
        let err: Box<dyn std::error::Error> = Box::new(AddressError::OnCurve);
        assert!(err.to_string().contains("curve"));
    }

    #[test]
    fn debug_format_works() {
        let err = AddressError::DerivationExhausted;
        let debug = format!("{:?}", err);
        assert!(debug.contains("DerivationExhausted"));
    }
}
