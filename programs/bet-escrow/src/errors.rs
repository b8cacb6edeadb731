use anchor_lang::prelude::*;

/// Custom error codes for the Bet Escrow program.
///
/// Error codes are offset from 6000 (Anchor convention).
#[error_code]
pub enum BetError {
    /// Caller identity is not allowed to perform this action on the bet:
    /// the oracle tried to enter, or a non-oracle tried to end.
    #[msg("Unauthorized caller: Oracle cannot enter a bet / This address cannot end the bet")]
    UnauthorizedCaller,

    /// Entry amount must be greater than zero.
    #[msg("Need to bet an amount greater than zero")]
    InvalidAmount,

    /// The caller already holds an entry for this bet.
    #[msg("Bet has already been placed for this user")]
    DuplicateEntry,

    /// Bet has ended; no more entries accepted.
    #[msg("Bet has ended")]
    BetClosed,

    /// Bet has already been resolved by its oracle.
    #[msg("Bet has already been ended")]
    AlreadyEnded,

    /// Claims open only once the oracle has ended the bet.
    #[msg("Bet has not ended yet")]
    BetNotEnded,

    /// Caller has no entry, or backed the losing position.
    #[msg("You have not won this bet")]
    NotAWinner,

    /// Winnings for this entry were already withdrawn.
    #[msg("Winnings have already been claimed")]
    AlreadyClaimed,

    /// Overflow in arithmetic operation.
    #[msg("Arithmetic overflow")]
    Overflow,

    /// Bet account holds less than the computed payout (should never happen if invariants hold).
    #[msg("Bet custody insufficient for payout")]
    VaultInsolvency,
}
