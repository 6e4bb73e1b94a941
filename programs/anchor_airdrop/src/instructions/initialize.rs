use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{transfer_token, verify_authority};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for initializing an airdrop
 *
 * - Creates the registry account (fresh keypair, signs the transaction)
 * - Creates the token custody account owned by the program authority
 * - Moves `claim_amount` tokens from the signer into custody
 *
 * Access Control: Any signer holding the tokens
 */
#[derive(Accounts)]
#[instruction(authority_bump: u8)]
pub struct Initialize<'info> {
    /// Creator of the airdrop
    /// - Pays for both new accounts and funds the custody account
    #[account(mut)]
    pub signer: Signer<'info>,

    /// The registry account
    #[account(init, payer = signer, space = Airdrop::LEN)]
    pub airdrop: Account<'info, Airdrop>,

    /// Mint of the airdropped token (SPL Token or Token 2022)
    #[account(token::token_program = token_program)]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Signer's token account the airdrop is funded from
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = signer,
        token::token_program = token_program,
    )]
    pub signer_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Token custody account (fresh keypair, signs the transaction)
    /// - Token authority is the program authority PDA, never a user key
    #[account(
        init,
        payer = signer,
        token::mint = token_mint,
        token::authority = program_authority,
        token::token_program = token_program,
    )]
    pub airdrop_tokens: InterfaceAccount<'info, TokenAccount>,

    /// Program authority PDA, derived from ["authority"]
    /// CHECK: address is checked against the supplied bump
    #[account(
        constraint = verify_authority(&crate::ID, program_authority.key, authority_bump)
            @ AirdropError::InvalidAuthority
    )]
    pub program_authority: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,

    pub rent: Sysvar<'info, Rent>,

    pub system_program: Program<'info, System>,
}

/**
 * Creates an airdrop and moves its token amount into custody
 *
 * @param ctx - The account context containing all required accounts
 * @param authority_bump - Bump reproducing the program authority PDA
 * @param claim_amount - Tokens reserved for the airdrop
 */
pub fn handle_initialize(
    ctx: Context<Initialize>,
    authority_bump: u8,
    claim_amount: u64,
) -> Result<()> {
    require!(claim_amount > 0, AirdropError::InvalidAmount);

    let airdrop = &mut ctx.accounts.airdrop;
    airdrop.version = AIRDROP_VERSION;
    airdrop.authority_bump = authority_bump;
    airdrop.user_count = 0;
    airdrop.distributed = false;
    airdrop.admin = ctx.accounts.signer.key();
    airdrop.token_mint = ctx.accounts.token_mint.key();
    airdrop.token_vault = ctx.accounts.airdrop_tokens.key();
    airdrop.claim_amount = claim_amount;
    airdrop.user_list = [Pubkey::default(); MAX_NUM_USERS];

    // Signer-authorized, so no PDA seeds
    transfer_token(
        ctx.accounts.signer.to_account_info(),
        ctx.accounts.signer_token_account.to_account_info(),
        ctx.accounts.airdrop_tokens.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        claim_amount,
        ctx.accounts.token_mint.decimals,
        None,
    )?;

    msg!(
        "airdrop {} initialized with {} tokens in custody",
        ctx.accounts.airdrop.key(),
        claim_amount
    );

    emit!(AirdropInitialized {
        airdrop: ctx.accounts.airdrop.key(),
        admin: ctx.accounts.signer.key(),
        token_mint: ctx.accounts.token_mint.key(),
        token_vault: ctx.accounts.airdrop_tokens.key(),
        claim_amount,
    });

    Ok(())
}
