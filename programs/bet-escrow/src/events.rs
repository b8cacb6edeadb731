use anchor_lang::prelude::*;

use crate::state::Position;

#[event]
pub struct BetStarted {
    pub id: u64,
    pub oracle: Pubkey,
}

#[event]
pub struct BetPlaced {
    pub id: u64,
    pub bettor: Pubkey,
    pub position: Position,
    pub amount: u64,
}

#[event]
pub struct BetEnded {
    pub id: u64,
    pub result: Position,
}

#[event]
pub struct WinningsClaimed {
    pub id: u64,
    pub winner: Pubkey,
    pub payout: u64,
}
