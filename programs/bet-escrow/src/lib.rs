use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;
use state::Position;

declare_id!("4ygTLubZxXHn62Z92NB1UqUNChmCqMRYsGxvsuopEtEr");

#[program]
pub mod bet_escrow {
    use super::*;

    /// Create the registry that hands out sequential bet ids.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Start a new bet round.
    ///
    /// The caller becomes the round's oracle: the only key that can end it,
    /// and the only key barred from entering it.
    pub fn start(ctx: Context<StartBet>) -> Result<()> {
        instructions::start::handler(ctx)
    }

    /// Enter bet `id` on `position`, depositing `amount` lamports.
    ///
    /// One entry per bettor per bet; the deposit stays in the bet account
    /// until winners claim.
    pub fn enter(ctx: Context<EnterBet>, id: u64, position: Position, amount: u64) -> Result<()> {
        instructions::enter::handler(ctx, id, position, amount)
    }

    /// Declare the winning position. Oracle only, once.
    pub fn end(ctx: Context<EndBet>, id: u64, winning_position: Position) -> Result<()> {
        instructions::end::handler(ctx, id, winning_position)
    }

    /// Withdraw winnings from an ended bet.
    ///
    /// payout = stake + stake × losing_pool / winning_pool
    ///
    /// The last winner to claim also receives any rounding remainder, so the
    /// bet's custody is fully distributed once every winner has claimed.
    pub fn claim(ctx: Context<ClaimWinnings>, id: u64) -> Result<()> {
        instructions::claim::handler(ctx, id)
    }
}
