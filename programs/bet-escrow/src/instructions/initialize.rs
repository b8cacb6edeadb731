use anchor_lang::prelude::*;

use crate::constants::REGISTRY_SEED;
use crate::state::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Pays for the registry account and becomes its authority.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Registry PDA — global bet id counter.
    #[account(
        init,
        payer = authority,
        space = Registry::SIZE,
        seeds = [REGISTRY_SEED],
        bump,
    )]
    pub registry: Account<'info, Registry>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.init(ctx.accounts.authority.key(), ctx.bumps.registry);

    msg!(
        "Registry initialized by {}, next bet id: {}",
        registry.authority,
        registry.next_bet_id,
    );

    Ok(())
}
