use anchor_lang::prelude::*;

use crate::error::AirdropError;

/// Moves lamports directly between two accounts.
///
/// The runtime only accepts the debit when `from` is owned by this program,
/// so callers must validate ownership in their account constraints. A short
/// balance fails with `shortfall` before either account is touched.
pub fn move_lamports<'a>(
    from: &AccountInfo<'a>,
    to: &AccountInfo<'a>,
    amount: u64,
    shortfall: AirdropError,
) -> Result<()> {
    let from_balance = from.lamports().checked_sub(amount).ok_or(shortfall)?;
    let to_balance = to
        .lamports()
        .checked_add(amount)
        .ok_or(AirdropError::ArithmeticOverflow)?;

    **from.try_borrow_mut_lamports()? = from_balance;
    **to.try_borrow_mut_lamports()? = to_balance;

    Ok(())
}

/// Balance left in the escrow after paying out `refund`, provided it stays at
/// or above `rent_floor`.
pub fn escrow_after_refund(balance: u64, refund: u64, rent_floor: u64) -> Result<u64> {
    let remaining = balance
        .checked_sub(refund)
        .ok_or(AirdropError::InsufficientEscrow)?;
    require!(remaining >= rent_floor, AirdropError::InsufficientEscrow);
    Ok(remaining)
}

/// Lamports left over once one `unit` is taken out of a contribution account
/// holding `balance`. The leftover goes back to the contributor so the
/// account is emptied in full.
pub fn split_contribution(balance: u64, unit: u64) -> Result<u64> {
    balance
        .checked_sub(unit)
        .ok_or_else(|| AirdropError::InsufficientContribution.into())
}
