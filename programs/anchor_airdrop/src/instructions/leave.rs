use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{escrow_after_refund, move_lamports};
use anchor_lang::prelude::*;

/**
 * Account context for leaving an airdrop
 *
 * Removes the signer from the userlist and refunds one contribution unit
 * from the registry's escrow.
 */
#[derive(Accounts)]
pub struct Leave<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(mut)]
    pub airdrop: Account<'info, Airdrop>,

    pub system_program: Program<'info, System>,
}

/**
 * Removes the signer from the userlist and refunds one contribution unit
 *
 * @param ctx - The account context containing all required accounts
 */
pub fn handle_leave(ctx: Context<Leave>) -> Result<()> {
    let user = ctx.accounts.user.key();

    let airdrop = &mut ctx.accounts.airdrop;
    let index = airdrop.remove_user(&user)?;
    let user_count = airdrop.user_count;

    let airdrop_info = ctx.accounts.airdrop.to_account_info();
    let rent_floor = Rent::get()?.minimum_balance(airdrop_info.data_len());
    escrow_after_refund(airdrop_info.lamports(), CONTRIBUTION_LAMPORTS, rent_floor)?;

    move_lamports(
        &airdrop_info,
        &ctx.accounts.user.to_account_info(),
        CONTRIBUTION_LAMPORTS,
        AirdropError::InsufficientEscrow,
    )?;

    msg!("user {} left from index {} ({}/{})", user, index, user_count, MAX_NUM_USERS);

    emit!(UserLeft {
        airdrop: ctx.accounts.airdrop.key(),
        user,
        index: index as u8,
        user_count,
        refunded: CONTRIBUTION_LAMPORTS,
    });

    Ok(())
}
