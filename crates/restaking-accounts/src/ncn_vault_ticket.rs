//! The NCN→vault opt-in ticket account.
//!
//! An NCN (node consensus network) creates one of these tickets per vault it
//! opts in to work with. The account is a PDA of the restaking program,
//! seeded by the ticket namespace literal and the two party keys, so its
//! address can be computed offline from `(program_id, ncn, vault)` alone.
//!
//! Wire layout, 129 bytes, little-endian:
//!   [0..8]     u64       discriminator (= 6)
//!   [8..40]    [u8; 32]  ncn
//!   [40..72]   [u8; 32]  vault
//!   [72..80]   u64       index
//!   [80..128]  SlotToggle state
//!   [128]      u8        bump

use sol_primitives::{find_program_address, Pubkey};

use crate::error::AccountError;
use crate::slot_toggle::SlotToggle;

/// Decoded NCN→vault ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NcnVaultTicket {
    /// The NCN that created the ticket.
    pub ncn: Pubkey,
    /// The vault the NCN opted in to.
    pub vault: Pubkey,
    /// Position of this ticket within the NCN's ticket collection.
    pub index: u64,
    /// Opt-in toggle, keyed by slot.
    pub state: SlotToggle,
    /// Bump seed of the ticket's PDA.
    pub bump: u8,
}

impl NcnVaultTicket {
    /// Value the leading 8-byte discriminator must hold for this account kind.
    pub const DISCRIMINATOR: u64 = 6;

    /// Serialized account size: 8 + 32 + 32 + 8 + 48 + 1.
    pub const LEN: usize = 8 + 32 + 32 + 8 + SlotToggle::LEN + 1;

    /// PDA seed namespace for this account kind.
    pub const SEED_PREFIX: &'static [u8] = b"ncn_vault_ticket";

    /// Decode a ticket from raw account data.
    ///
    /// The leading discriminator is consumed but not verified; callers that
    /// need protection against wrong-kind buffers run
    /// [`check_discriminator`](Self::check_discriminator) first. Trailing
    /// bytes beyond [`Self::LEN`] are ignored.
    pub fn deserialize(data: &[u8]) -> Result<Self, AccountError> {
        if data.len() < Self::LEN {
            return Err(AccountError::DataTooShort {
                expected: Self::LEN,
                actual: data.len(),
            });
        }

        let mut offset = 8; // skip the discriminator

        let ncn = Pubkey::new(data[offset..offset + 32].try_into().expect("32-byte slice"));
        offset += 32;

        let vault = Pubkey::new(data[offset..offset + 32].try_into().expect("32-byte slice"));
        offset += 32;

        let index = u64::from_le_bytes(data[offset..offset + 8].try_into().expect("8-byte slice"));
        offset += 8;

        let state = SlotToggle::deserialize(&data[offset..offset + SlotToggle::LEN])?;
        offset += SlotToggle::LEN;

        let bump = data[offset];

        Ok(Self {
            ncn,
            vault,
            index,
            state,
            bump,
        })
    }

    /// Verify the leading 8-byte discriminator against
    /// [`DISCRIMINATOR`](Self::DISCRIMINATOR).
    ///
    /// Separate from [`deserialize`](Self::deserialize) so callers decide
    /// whether to enforce account-kind safety.
    pub fn check_discriminator(data: &[u8]) -> Result<(), AccountError> {
        if data.len() < 8 {
            return Err(AccountError::DataTooShort {
                expected: 8,
                actual: data.len(),
            });
        }

        let actual = u64::from_le_bytes(data[0..8].try_into().expect("8-byte slice"));
        if actual != Self::DISCRIMINATOR {
            return Err(AccountError::InvalidDiscriminator {
                expected: Self::DISCRIMINATOR,
                actual,
            });
        }

        Ok(())
    }

    /// PDA seeds for the ticket of `(ncn, vault)`:
    /// `[b"ncn_vault_ticket", ncn, vault]`.
    pub fn seeds(ncn: &Pubkey, vault: &Pubkey) -> Vec<Vec<u8>> {
        vec![
            Self::SEED_PREFIX.to_vec(),
            ncn.as_bytes().to_vec(),
            vault.as_bytes().to_vec(),
        ]
    }

    /// Find the ticket's PDA under `program_id`.
    ///
    /// Returns the address, the canonical bump, and the seeds used, so the
    /// caller can re-verify the derivation without rebuilding the seeds.
    pub fn find_program_address(
        program_id: &Pubkey,
        ncn: &Pubkey,
        vault: &Pubkey,
    ) -> Result<(Pubkey, u8, Vec<Vec<u8>>), AccountError> {
        let seeds = Self::seeds(ncn, vault);
        let seed_refs: Vec<&[u8]> = seeds.iter().map(|s| s.as_slice()).collect();
        let (address, bump) = find_program_address(&seed_refs, program_id)?;

        Ok((address, bump, seeds))
    }
}
