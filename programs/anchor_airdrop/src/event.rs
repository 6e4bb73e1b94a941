use anchor_lang::prelude::*;

/// Event emitted when a new airdrop registry is initialized
#[event]
pub struct AirdropInitialized {
    /// The airdrop registry account public key
    pub airdrop: Pubkey,
    /// Signer who created and funded the airdrop
    pub admin: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token custody account address
    pub token_vault: Pubkey,
    /// Amount of tokens moved into custody
    pub claim_amount: u64,
}

/// Event emitted when a user joins the registry
#[event]
pub struct UserJoined {
    pub airdrop: Pubkey,
    pub user: Pubkey,
    /// Position of the new entry in the userlist
    pub index: u8,
    /// Number of members after the join
    pub user_count: u8,
}

/// Event emitted when a user leaves the registry and is refunded
#[event]
pub struct UserLeft {
    pub airdrop: Pubkey,
    pub user: Pubkey,
    /// Position the user held before removal
    pub index: u8,
    /// Number of members after the leave
    pub user_count: u8,
    /// Lamports returned to the user
    pub refunded: u64,
}

/// Event emitted when the custody balance is split across members
#[event]
pub struct AirdropDistributed {
    pub airdrop: Pubkey,
    /// Number of members paid
    pub recipients: u8,
    /// Tokens paid to each member
    pub amount_per_user: u64,
    /// Tokens left in custody after rounding down
    pub remainder: u64,
}
