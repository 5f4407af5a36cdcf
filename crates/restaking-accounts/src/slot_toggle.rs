//! The slot-keyed on/off toggle embedded in opt-in accounts.
//!
//! The restaking program tracks mutual opt-ins with a pair of slot numbers:
//! the slot at which the relationship was last activated and the slot at
//! which it was last deactivated. This crate only decodes those fields; the
//! activation-window arithmetic lives on chain and is not reproduced here.

use crate::error::AccountError;

/// Decoded 48-byte toggle sub-structure.
///
/// Wire layout (little-endian):
///   [0..8]   u64  slot_added
///   [8..16]  u64  slot_removed
///   [16..48] [u8; 32] reserved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotToggle {
    /// Slot at which the toggle was last switched on.
    pub slot_added: u64,
    /// Slot at which the toggle was last switched off.
    pub slot_removed: u64,
    /// Reserved tail bytes, carried opaquely.
    pub reserved: [u8; 32],
}

impl SlotToggle {
    /// Serialized width of the toggle: 8 + 8 + 32.
    pub const LEN: usize = 48;

    /// Decode a toggle from the leading 48 bytes of `data`.
    ///
    /// Trailing bytes beyond [`Self::LEN`] are ignored.
    pub fn deserialize(data: &[u8]) -> Result<Self, AccountError> {
        if data.len() < Self::LEN {
            return Err(AccountError::DataTooShort {
                expected: Self::LEN,
                actual: data.len(),
            });
        }

        let slot_added = u64::from_le_bytes(data[0..8].try_into().expect("8-byte slice"));
        let slot_removed = u64::from_le_bytes(data[8..16].try_into().expect("8-byte slice"));
        let reserved: [u8; 32] = data[16..48].try_into().expect("32-byte slice");

        Ok(Self {
            slot_added,
            slot_removed,
            reserved,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle_bytes(slot_added: u64, slot_removed: u64) -> Vec<u8> {
        let mut data = Vec::with_capacity(SlotToggle::LEN);
        data.extend_from_slice(&slot_added.to_le_bytes());
        data.extend_from_slice(&slot_removed.to_le_bytes());
        data.extend_from_slice(&[0u8; 32]);
        data
    }

    #[test]
    fn decode_known_slots() {
        let toggle = SlotToggle::deserialize(&toggle_bytes(1234, 5678)).unwrap();
        assert_eq!(toggle.slot_added, 1234);
        assert_eq!(toggle.slot_removed, 5678);
        assert_eq!(toggle.reserved, [0u8; 32]);
    }

    #[test]
    fn all_zero_bytes_decode_to_default() {
        let toggle = SlotToggle::deserialize(&[0u8; 48]).unwrap();
        assert_eq!(toggle, SlotToggle::default());
    }

    #[test]
    fn slots_are_little_endian() {
        let mut data = [0u8; 48];
        data[0] = 0x01; // slot_added = 1
        data[8] = 0x02; // slot_removed = 2
        let toggle = SlotToggle::deserialize(&data).unwrap();
        assert_eq!(toggle.slot_added, 1);
        assert_eq!(toggle.slot_removed, 2);
    }

    #[test]
    fn reserved_bytes_are_preserved() {
        let mut data = [0u8; 48];
        data[16..48].copy_from_slice(&[0xABu8; 32]);
        let toggle = SlotToggle::deserialize(&data).unwrap();
        assert_eq!(toggle.reserved, [0xABu8; 32]);
    }

    #[test]
    fn short_slice_is_rejected() {
        for len in [0usize, 1, 16, 47] {
            let data = vec![0u8; len];
            let err = SlotToggle::deserialize(&data).unwrap_err();
            assert!(matches!(
                err,
                AccountError::DataTooShort {
                    expected: SlotToggle::LEN,
                    actual,
                } if actual == len
            ));
        }
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut data = toggle_bytes(7, 9);
        data.extend_from_slice(&[0xFFu8; 10]);
        let toggle = SlotToggle::deserialize(&data).unwrap();
        assert_eq!(toggle.slot_added, 7);
        assert_eq!(toggle.slot_removed, 9);
    }
}
