use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;

/**
 * Airdrop registry account
 *
 * Holds the fixed-capacity membership list together with the parameters
 * fixed at initialization. The account's own lamport balance is the escrow
 * pool: every member has exactly one contribution unit locked in it.
 *
 * Layout (after the 8-byte discriminator, Borsh, declaration order):
 *   version, authority_bump, user_count, distributed, admin, token_mint,
 *   token_vault, claim_amount, user_list
 *
 * Lifecycle:
 * 1. Created by initialize with an empty userlist
 * 2. join appends, leave removes (tail shifts left)
 * 3. distribute marks it distributed; never closed
 */
#[account]
#[derive(Default, Debug)]
pub struct Airdrop {
    /// Layout version, see AIRDROP_VERSION
    pub version: u8,

    /// Bump of the program authority PDA
    /// - Verified at initialization, reused for signing afterwards
    pub authority_bump: u8,

    /// Number of live entries at the front of user_list
    pub user_count: u8,

    /// Set once the custody balance has been split across members
    pub distributed: bool,

    /// Signer of initialize, the only account allowed to distribute
    pub admin: Pubkey,

    /// Mint of the airdropped token
    pub token_mint: Pubkey,

    /// Token custody account, owned by the program authority
    pub token_vault: Pubkey,

    /// Tokens moved into custody at initialization
    pub claim_amount: u64,

    /// Members in join order
    /// - Slots at or past user_count are always Pubkey::default()
    pub user_list: [Pubkey; MAX_NUM_USERS],
}

impl Airdrop {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Airdrop>();

    /// Members currently registered, in join order
    pub fn users(&self) -> &[Pubkey] {
        &self.user_list[..self.user_count as usize]
    }

    pub fn is_full(&self) -> bool {
        self.user_count as usize >= MAX_NUM_USERS
    }

    pub fn position(&self, user: &Pubkey) -> Option<usize> {
        self.users().iter().position(|member| member == user)
    }

    pub fn contains(&self, user: &Pubkey) -> bool {
        self.position(user).is_some()
    }

    /// Appends `user` to the end of the list and returns its index.
    pub fn add_user(&mut self, user: Pubkey) -> Result<usize> {
        require!(!self.is_full(), AirdropError::UserListFull);
        require!(!self.contains(&user), AirdropError::UserAlreadyInUserlist);

        let index = self.user_count as usize;
        self.user_list[index] = user;
        self.user_count = self
            .user_count
            .checked_add(1)
            .ok_or(AirdropError::ArithmeticOverflow)?;

        Ok(index)
    }

    /// Removes `user`, shifting later entries left by one, and returns the
    /// index it occupied.
    pub fn remove_user(&mut self, user: &Pubkey) -> Result<usize> {
        let index = self
            .position(user)
            .ok_or(AirdropError::UserNotInUserlist)?;
        let len = self.user_count as usize;

        self.user_list.copy_within(index + 1..len, index);
        self.user_list[len - 1] = Pubkey::default();
        self.user_count -= 1;

        Ok(index)
    }

    /// Tokens each member receives on distribution and what stays in custody.
    pub fn distribution_share(&self) -> Result<(u64, u64)> {
        require!(self.user_count > 0, AirdropError::EmptyUserList);

        let count = self.user_count as u64;
        let share = self
            .claim_amount
            .checked_div(count)
            .ok_or(AirdropError::ArithmeticOverflow)?;
        let remainder = self
            .claim_amount
            .checked_rem(count)
            .ok_or(AirdropError::ArithmeticOverflow)?;

        Ok((share, remainder))
    }
}
