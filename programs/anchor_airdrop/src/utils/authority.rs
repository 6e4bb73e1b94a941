use anchor_lang::prelude::*;

use crate::constants::AUTHORITY_SEED;

/// Finds the program authority PDA and its canonical bump.
/// Used by clients before calling initialize.
pub fn derive_authority(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[AUTHORITY_SEED], program_id)
}

/// Returns true when `bump` reproduces `address` from the authority seed.
pub fn verify_authority(program_id: &Pubkey, address: &Pubkey, bump: u8) -> bool {
    match Pubkey::create_program_address(&[AUTHORITY_SEED, &[bump]], program_id) {
        Ok(derived) => derived == *address,
        Err(_) => false,
    }
}

/// Seeds for signing CPIs as the program authority.
pub fn authority_signer_seeds(bump: &[u8; 1]) -> [&[u8]; 2] {
    [AUTHORITY_SEED, bump]
}
