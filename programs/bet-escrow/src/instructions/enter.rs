use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::{BET_SEED, ENTRY_SEED};
use crate::events::BetPlaced;
use crate::state::*;

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct EnterBet<'info> {
    /// The bettor placing the wager.
    #[account(mut)]
    pub bettor: Signer<'info>,

    /// The bet being entered; receives the deposit.
    #[account(
        mut,
        seeds = [BET_SEED, id.to_le_bytes().as_ref()],
        bump = bet.bump,
    )]
    pub bet: Account<'info, Bet>,

    /// Entry PDA — created on first entry; an existing one is rejected.
    #[account(
        init_if_needed,
        payer = bettor,
        space = Entry::SIZE,
        seeds = [ENTRY_SEED, bet.key().as_ref(), bettor.key().as_ref()],
        bump,
    )]
    pub entry: Account<'info, Entry>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<EnterBet>, _id: u64, position: Position, amount: u64) -> Result<()> {
    let bettor = ctx.accounts.bettor.key();
    let bet_key = ctx.accounts.bet.key();

    ctx.accounts
        .bet
        .record_entry(&mut ctx.accounts.entry, bettor, position, amount)?;

    let entry = &mut ctx.accounts.entry;
    entry.bet = bet_key;
    entry.bump = ctx.bumps.entry;

    // Transfer SOL from bettor into bet custody
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.bettor.to_account_info(),
                to: ctx.accounts.bet.to_account_info(),
            },
        ),
        amount,
    )?;

    let bet = &ctx.accounts.bet;
    msg!(
        "Bet placed: {} lamports on {:?} for bet #{} by {}",
        amount,
        position,
        bet.id,
        bettor,
    );

    emit!(BetPlaced {
        id: bet.id,
        bettor,
        position,
        amount,
    });

    Ok(())
}
