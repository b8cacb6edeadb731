use anchor_lang::error::ErrorCode;
use anchor_lang::prelude::*;

use crate::constants::{BET_SEED, ENTRY_SEED};
use crate::errors::BetError;
use crate::events::WinningsClaimed;
use crate::state::*;

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct ClaimWinnings<'info> {
    /// The bettor withdrawing winnings.
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// The ended bet; source of payout funds.
    #[account(
        mut,
        seeds = [BET_SEED, id.to_le_bytes().as_ref()],
        bump = bet.bump,
    )]
    pub bet: Account<'info, Bet>,

    /// Claimant's entry PDA. May not exist if the claimant never entered,
    /// which is reported as `NotAWinner` rather than a missing account.
    /// CHECK: Address validated by seeds; owner and discriminator checked in handler.
    #[account(
        mut,
        seeds = [ENTRY_SEED, bet.key().as_ref(), claimant.key().as_ref()],
        bump,
    )]
    pub entry: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<ClaimWinnings>, _id: u64) -> Result<()> {
    let entry_info = ctx.accounts.entry.to_account_info();

    let mut entry = if entry_info.data_is_empty() {
        Entry::default()
    } else {
        require_keys_eq!(
            *entry_info.owner,
            crate::ID,
            ErrorCode::AccountOwnedByWrongProgram
        );
        let data = entry_info.try_borrow_data()?;
        let entry = Entry::try_deserialize(&mut &data[..])?;
        entry
    };

    let bet = &mut ctx.accounts.bet;
    let payout = bet.settle_claim(&mut entry)?;

    // Custody must cover the payout without touching the rent-exempt reserve
    let bet_info = bet.to_account_info();
    let reserve = Rent::get()?.minimum_balance(bet_info.data_len());
    let available = bet_info
        .lamports()
        .checked_sub(reserve)
        .ok_or(BetError::VaultInsolvency)?;
    require!(payout <= available, BetError::VaultInsolvency);

    // Direct lamport transfer out of the program-owned bet account
    **bet_info.try_borrow_mut_lamports()? -= payout;
    **ctx.accounts.claimant.to_account_info().try_borrow_mut_lamports()? += payout;

    {
        let mut data = entry_info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        entry.try_serialize(&mut writer)?;
    }

    msg!(
        "Claimed: bettor={} payout={} (stake={}), bet #{}",
        ctx.accounts.claimant.key(),
        payout,
        entry.amount,
        bet.id,
    );

    emit!(WinningsClaimed {
        id: bet.id,
        winner: ctx.accounts.claimant.key(),
        payout,
    });

    Ok(())
}
