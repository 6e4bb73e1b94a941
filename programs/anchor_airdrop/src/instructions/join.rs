use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{move_lamports, split_contribution};
use anchor_lang::prelude::*;

/**
 * Account context for joining an airdrop
 *
 * The caller prefunds a fresh program-owned account with the contribution;
 * this instruction drains one contribution unit from it into the registry,
 * sweeps anything left back to the user and appends the user to the userlist.
 *
 * Access Control: The user and the contribution account keypair both sign
 */
#[derive(Accounts)]
pub struct Join<'info> {
    /// Receives whatever the contribution account holds above one unit
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(mut)]
    pub airdrop: Account<'info, Airdrop>,

    /// Program-owned account holding the contribution
    /// - Signs, so only whoever holds its keypair can spend it
    #[account(
        mut,
        owner = crate::ID @ AirdropError::InvalidContributionAccount,
        constraint = airdrop_owned_lamports.key() != airdrop.key()
            @ AirdropError::InvalidContributionAccount,
        constraint = airdrop_owned_lamports.key() != user.key()
            @ AirdropError::InvalidContributionAccount
    )]
    pub airdrop_owned_lamports: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/**
 * Escrows one contribution unit and appends the signer to the userlist
 *
 * The contribution account always ends with zero lamports and is purged by
 * the runtime after the transaction.
 *
 * @param ctx - The account context containing all required accounts
 */
pub fn handle_join(ctx: Context<Join>) -> Result<()> {
    let user = ctx.accounts.user.key();
    let contribution = ctx.accounts.airdrop_owned_lamports.to_account_info();

    // Another registry is program-owned too; never drain one as a contribution
    require!(
        !contribution
            .try_borrow_data()?
            .starts_with(Airdrop::DISCRIMINATOR),
        AirdropError::InvalidContributionAccount
    );

    let airdrop = &mut ctx.accounts.airdrop;
    require!(!airdrop.distributed, AirdropError::AirdropDistributed);

    let index = airdrop.add_user(user)?;
    let user_count = airdrop.user_count;

    let leftover = split_contribution(contribution.lamports(), CONTRIBUTION_LAMPORTS)?;

    move_lamports(
        &contribution,
        &ctx.accounts.airdrop.to_account_info(),
        CONTRIBUTION_LAMPORTS,
        AirdropError::InsufficientContribution,
    )?;
    if leftover > 0 {
        move_lamports(
            &contribution,
            &ctx.accounts.user.to_account_info(),
            leftover,
            AirdropError::InsufficientContribution,
        )?;
    }

    msg!(
        "user {} joined at index {} ({}/{}), {} lamports returned",
        user,
        index,
        user_count,
        MAX_NUM_USERS,
        leftover
    );

    emit!(UserJoined {
        airdrop: ctx.accounts.airdrop.key(),
        user,
        index: index as u8,
        user_count,
    });

    Ok(())
}
