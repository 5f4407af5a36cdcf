//! Program Derived Address (PDA) computation.
//!
//! A PDA is a deterministic 32-byte address computed from a program id and an
//! ordered seed sequence, disambiguated by a bump byte chosen so the result
//! is NOT a valid Ed25519 curve point. Programs can sign for off-curve
//! addresses; on-curve results must be skipped, which is what the bump search
//! is for.

use sha2::{Digest, Sha256};

use crate::error::AddressError;
use crate::pubkey::Pubkey;

/// The string appended to PDA derivation: "ProgramDerivedAddress".
const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// Find the canonical Program Derived Address for the given seeds and program.
///
/// Iterates bump seeds from 255 down to 0, computing
/// `SHA-256(seed_0 || seed_1 || ... || bump || program_id || "ProgramDerivedAddress")`
/// and returning the first result that is NOT a valid Ed25519 point, together
/// with the accepted bump. The search is bounded at 256 hash rounds; if every
/// bump lands on the curve (cryptographically negligible) the exhaustion is
/// reported as [`AddressError::DerivationExhausted`], never a panic.
pub fn find_program_address(
    seeds: &[&[u8]],
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), AddressError> {
    find_program_address_with(seeds, program_id, |digest| !is_on_curve(digest))
}

/// Bump search with an injectable acceptance test, so the exhaustion path is
/// reachable from tests without forging 256 curve points.
fn find_program_address_with<F>(
    seeds: &[&[u8]],
    program_id: &Pubkey,
    accept: F,
) -> Result<(Pubkey, u8), AddressError>
where
    F: Fn(&[u8; 32]) -> bool,
{
    for bump in (0u8..=255).rev() {
        let digest = derivation_digest(seeds, bump, program_id);
        if accept(&digest) {
            return Ok((Pubkey::new(digest), bump));
        }
    }

    Err(AddressError::DerivationExhausted)
}

/// Compute the PDA for a known bump.
///
/// Fails with [`AddressError::OnCurve`] if the digest is a valid Ed25519
/// point. Lets callers re-verify an `(address, bump)` pair returned by
/// [`find_program_address`] without re-running the search.
pub fn create_program_address(
    seeds: &[&[u8]],
    bump: u8,
    program_id: &Pubkey,
) -> Result<Pubkey, AddressError> {
    let digest = derivation_digest(seeds, bump, program_id);
    if is_on_curve(&digest) {
        return Err(AddressError::OnCurve);
    }
    Ok(Pubkey::new(digest))
}

fn derivation_digest(seeds: &[&[u8]], bump: u8, program_id: &Pubkey) -> [u8; 32] {
    let mut hasher = Sha256::new();

    for seed in seeds {
        hasher.update(seed);
    }
    hasher.update([bump]);
    hasher.update(program_id.as_bytes());
    hasher.update(PDA_MARKER);

    hasher.finalize().into()
}

/// Check if 32 bytes represent a valid Ed25519 curve point.
///
/// Uses `curve25519-dalek` to attempt decompression. If it succeeds, the
/// point is on the curve.
pub fn is_on_curve(bytes: &[u8; 32]) -> bool {
    curve25519_dalek::edwards::CompressedEdwardsY(*bytes)
        .decompress()
        .is_some()
}
