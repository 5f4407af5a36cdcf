//! Shared Solana vocabulary for client-side account tooling.
//!
//! Provides the 32-byte [`Pubkey`] value type with its Base58 text form, and
//! offline Program Derived Address (PDA) computation — all without pulling in
//! `solana-sdk` (which drags in tokio and 200+ transitive dependencies).
//!
//! Instead we implement the PDA bump search by hand, using `sha2` for the
//! derivation hash, `curve25519-dalek` for the Ed25519 off-curve check, and
//! `bs58` for Base58 encoding.

pub mod error;
pub mod pda;
pub mod pubkey;

// Re-export key public types for ergonomic imports.
pub use error::AddressError;
pub use pda::{create_program_address, find_program_address, is_on_curve};
pub use pubkey::Pubkey;
