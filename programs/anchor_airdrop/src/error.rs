use anchor_lang::prelude::*;

// Codes start at 300; clients match UserListFull by that value.
#[error_code(offset = 300)]
pub enum AirdropError {
    // Capacity errors
    // 300
    #[msg("Userlist is full")]
    UserListFull,

    // Membership errors
    // 301
    #[msg("User not in userlist")]
    UserNotInUserlist,
    // 302
    #[msg("User already in userlist")]
    UserAlreadyInUserlist,

    // Authorization errors
    // 303
    #[msg("Program authority does not match the supplied bump")]
    InvalidAuthority,

    // Funding errors
    // 304
    #[msg("Contribution account does not hold enough lamports")]
    InsufficientContribution,
    // 305
    #[msg("Airdrop escrow cannot cover the refund")]
    InsufficientEscrow,

    // Validation errors
    // 306
    #[msg("Invalid amount")]
    InvalidAmount,

    // Distribution errors
    // 307
    #[msg("Airdrop has already been distributed")]
    AirdropDistributed,
    // 308
    #[msg("Userlist is empty")]
    EmptyUserList,
    // 309
    #[msg("Number of recipient accounts does not match the userlist")]
    RecipientCountMismatch,
    // 310
    #[msg("Recipient token account does not belong to the listed user")]
    InvalidRecipient,
    // 311
    #[msg("Insufficient vault balance for distribution")]
    InsufficientVaultBalance,

    // Arithmetic errors
    // 312
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    // Account validation errors
    // 313
    #[msg("Contribution account must be a program-owned account other than a registry")]
    InvalidContributionAccount,
    // 314
    #[msg("Token mint does not match the airdrop's token mint")]
    TokenMintMismatch,
    // 315
    #[msg("Token vault does not match the airdrop's custody account")]
    TokenVaultMismatch,
}

/// Coarse grouping of [`AirdropError`] for callers that branch on the kind of
/// failure rather than the exact code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Capacity,
    Membership,
    Authorization,
    Funding,
    Validation,
    State,
}

impl AirdropError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AirdropError::UserListFull => ErrorCategory::Capacity,
            AirdropError::UserNotInUserlist | AirdropError::UserAlreadyInUserlist => {
                ErrorCategory::Membership
            }
            AirdropError::InvalidAuthority
            | AirdropError::InvalidRecipient
            | AirdropError::InvalidContributionAccount => ErrorCategory::Authorization,
            AirdropError::InsufficientContribution
            | AirdropError::InsufficientEscrow
            | AirdropError::InsufficientVaultBalance => ErrorCategory::Funding,
            AirdropError::InvalidAmount
            | AirdropError::RecipientCountMismatch
            | AirdropError::ArithmeticOverflow
            | AirdropError::TokenMintMismatch
            | AirdropError::TokenVaultMismatch => ErrorCategory::Validation,
            AirdropError::AirdropDistributed | AirdropError::EmptyUserList => {
                ErrorCategory::State
            }
        }
    }
}
