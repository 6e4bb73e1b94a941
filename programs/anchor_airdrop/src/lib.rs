use anchor_lang::prelude::*;

declare_id!("iFg9jmmegPPhwB7PTnoPQQKutjYHqCMwc8ygH3kj2cg");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Anchor Airdrop Program
 *
 * Custodies a token pool for a bounded group of participants. Participants
 * register by escrowing a fixed lamport contribution and can leave at any
 * time to get it back.
 *
 * Architecture:
 * - Airdrop registry: fixed-capacity userlist, claim amount, authority bump;
 *   its lamport balance is the contribution escrow
 * - Token custody account: holds the airdropped tokens, owned by the
 *   program authority
 * - Program authority PDA ["authority"]: keyless signer for custody transfers
 *
 * Workflow:
 * 1. Creator initializes the registry and moves the tokens into custody
 * 2. Users join (escrow 1 SOL each, up to MAX_NUM_USERS)
 * 3. Users may leave and are refunded their contribution
 * 4. Admin distributes the custody balance equally across members
 */
#[program]
pub mod anchor_airdrop {
    use super::*;

    /**
     * Creates the registry and token custody accounts
     *
     * @param authority_bump - Bump of the program authority PDA, found off-chain
     * @param claim_amount - Tokens moved from the signer into custody
     *
     * Access Control: Any signer
     */
    pub fn initialize(ctx: Context<Initialize>, authority_bump: u8, claim_amount: u64) -> Result<()> {
        handle_initialize(ctx, authority_bump, claim_amount)
    }

    /**
     * Registers the signer, escrowing one contribution unit
     *
     * Access Control: Any signer not already registered, co-signed by the
     * contribution account
     */
    pub fn join(ctx: Context<Join>) -> Result<()> {
        handle_join(ctx)
    }

    /**
     * Unregisters the signer and refunds the contribution
     *
     * Access Control: Registered members only
     */
    pub fn leave(ctx: Context<Leave>) -> Result<()> {
        handle_leave(ctx)
    }

    /**
     * Splits the custody balance across current members
     *
     * Remaining accounts: one token account per member, in userlist order
     *
     * Access Control: Admin only
     */
    pub fn distribute<'info>(ctx: Context<'_, '_, 'info, 'info, Distribute<'info>>) -> Result<()> {
        handle_distribute(ctx)
    }
}
