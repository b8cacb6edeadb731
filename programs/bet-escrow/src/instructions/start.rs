use anchor_lang::prelude::*;

use crate::constants::{BET_SEED, REGISTRY_SEED};
use crate::events::BetStarted;
use crate::state::*;

#[derive(Accounts)]
pub struct StartBet<'info> {
    /// Bet creator — becomes the oracle and pays for account allocation.
    #[account(mut)]
    pub oracle: Signer<'info>,

    /// Registry — provides next_bet_id.
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// Bet PDA — the record for this round; also custodies deposits.
    #[account(
        init,
        payer = oracle,
        space = Bet::SIZE,
        seeds = [BET_SEED, registry.next_bet_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub bet: Account<'info, Bet>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<StartBet>) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    let id = registry.allocate_id()?;

    let bet = &mut ctx.accounts.bet;
    bet.open(id, ctx.accounts.oracle.key(), ctx.bumps.bet);

    msg!("Bet #{} started, oracle: {}", bet.id, bet.oracle);

    emit!(BetStarted {
        id,
        oracle: bet.oracle,
    });

    Ok(())
}
