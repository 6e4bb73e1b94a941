use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{authority_signer_seeds, transfer_token, verify_authority};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for distributing the custody balance
 *
 * Splits `claim_amount` equally across the current members. The recipient
 * token accounts are passed as remaining accounts, one per member, in
 * userlist order.
 *
 * Access Control: Admin only
 *
 * Business Logic:
 * - Runs once; afterwards join is closed but leave keeps refunding
 * - Share is claim_amount / user_count, the remainder stays in custody
 * - Transfers are signed by the program authority PDA
 */
#[derive(Accounts)]
pub struct Distribute<'info> {
    #[account(
        mut,
        has_one = admin @ AirdropError::InvalidAuthority,
        has_one = token_vault @ AirdropError::TokenVaultMismatch,
        has_one = token_mint @ AirdropError::TokenMintMismatch,
    )]
    pub airdrop: Account<'info, Airdrop>,

    pub admin: Signer<'info>,

    /// Token custody account, debited by the program authority
    #[account(
        mut,
        token::token_program = token_program,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(token::token_program = token_program)]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Program authority PDA
    /// CHECK: address is checked against the bump stored at initialization
    #[account(
        constraint = verify_authority(&crate::ID, program_authority.key, airdrop.authority_bump)
            @ AirdropError::InvalidAuthority
    )]
    pub program_authority: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Pays every member an equal share of the custody balance
 *
 * @param ctx - The account context; remaining accounts are the recipient
 *              token accounts in userlist order
 */
pub fn handle_distribute<'info>(
    ctx: Context<'_, '_, 'info, 'info, Distribute<'info>>,
) -> Result<()> {
    let airdrop = &ctx.accounts.airdrop;

    // ===== VALIDATION PHASE =====

    require!(!airdrop.distributed, AirdropError::AirdropDistributed);

    let (share, remainder) = airdrop.distribution_share()?;
    require!(share > 0, AirdropError::InvalidAmount);
    require!(
        ctx.remaining_accounts.len() == airdrop.user_count as usize,
        AirdropError::RecipientCountMismatch
    );
    require!(
        ctx.accounts.token_vault.amount >= airdrop.claim_amount,
        AirdropError::InsufficientVaultBalance
    );

    let members = airdrop.users().to_vec();
    let mut recipients = Vec::with_capacity(members.len());
    for (member, account_info) in members.iter().zip(ctx.remaining_accounts.iter()) {
        let recipient = InterfaceAccount::<TokenAccount>::try_from(account_info)?;
        require_keys_eq!(recipient.owner, *member, AirdropError::InvalidRecipient);
        require_keys_eq!(recipient.mint, airdrop.token_mint, AirdropError::InvalidRecipient);
        recipients.push(account_info.clone());
    }

    // ===== EFFECTS PHASE =====

    let bump = [airdrop.authority_bump];
    let seeds = authority_signer_seeds(&bump);
    let signer = &[&seeds[..]];

    ctx.accounts.airdrop.distributed = true;

    // ===== INTERACTIONS PHASE =====

    for recipient in recipients {
        transfer_token(
            ctx.accounts.program_authority.to_account_info(),
            ctx.accounts.token_vault.to_account_info(),
            recipient,
            ctx.accounts.token_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            share,
            ctx.accounts.token_mint.decimals,
            Some(signer),
        )?;
    }

    msg!(
        "airdrop {} distributed {} tokens to {} users, {} left in custody",
        ctx.accounts.airdrop.key(),
        share,
        members.len(),
        remainder
    );

    emit!(AirdropDistributed {
        airdrop: ctx.accounts.airdrop.key(),
        recipients: members.len() as u8,
        amount_per_user: share,
        remainder,
    });

    Ok(())
}
