use anchor_lang::prelude::*;

use crate::constants::BET_SEED;
use crate::events::BetEnded;
use crate::state::*;

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct EndBet<'info> {
    /// Caller claiming to be the oracle; checked against `bet.oracle`.
    pub oracle: Signer<'info>,

    /// The bet to resolve.
    #[account(
        mut,
        seeds = [BET_SEED, id.to_le_bytes().as_ref()],
        bump = bet.bump,
    )]
    pub bet: Account<'info, Bet>,
}

pub fn handler(ctx: Context<EndBet>, _id: u64, winning_position: Position) -> Result<()> {
    let bet = &mut ctx.accounts.bet;
    bet.end(ctx.accounts.oracle.key(), winning_position)?;

    msg!(
        "Bet #{} ended: result={:?}, pool_a={}, pool_b={}",
        bet.id,
        winning_position,
        bet.pool_a,
        bet.pool_b,
    );

    emit!(BetEnded {
        id: bet.id,
        result: winning_position,
    });

    Ok(())
}
