//! Read-side decoding for restaking program accounts.
//!
//! This crate recovers typed values from raw account bytes fetched from
//! chain storage, and computes the Program Derived Address (PDA) each
//! account is expected to live at — both offline, with no RPC round trip.
//!
//! Account layouts here are fixed-offset and little-endian. Decoding is a
//! byte-exact contract with the on-chain program: there is no length prefix
//! or self-describing framing, so field order and width must match exactly.
//!
//! The write path (building instructions, serializing accounts back to
//! bytes) is deliberately absent.

pub mod error;
pub mod ncn_vault_ticket;
pub mod slot_toggle;

// Re-export key public types for ergonomic imports.
pub use error::AccountError;
pub use ncn_vault_ticket::NcnVaultTicket;
pub use slot_toggle::SlotToggle;
