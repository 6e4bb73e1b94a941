use anchor_lang::prelude::*;
use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

/**
 * Program Constants
 *
 * Values that shape the registry layout, the escrow unit and the
 * authority derivation. Changing any of them changes the on-chain layout
 * or the authority address, so they are fixed at compile time.
 */

/// ===== PDA SEED CONSTANTS =====

/// Seed for the program authority PDA
/// - Used in: ["authority"]
/// - The authority owns every token custody account created by `initialize`
/// - Has no private key; the program signs for it with this seed and the stored bump
#[constant]
pub const AUTHORITY_SEED: &[u8] = b"authority";

/// ===== REGISTRY CONSTANTS =====

/// Maximum number of members a single airdrop registry can hold
#[constant]
pub const MAX_NUM_USERS: usize = 11;

/// Lamports escrowed by `join` and refunded by `leave` (1 SOL)
#[constant]
pub const CONTRIBUTION_LAMPORTS: u64 = LAMPORTS_PER_SOL;

/// Layout version written into every registry at initialization
#[constant]
pub const AIRDROP_VERSION: u8 = 1;
