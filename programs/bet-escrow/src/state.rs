use anchor_lang::prelude::*;

use crate::constants::FIRST_BET_ID;
use crate::errors::BetError;

/// ─── Registry Account ─────────────────────────────────────────────
///
/// PDA: seeds = [b"registry"]
///
/// Owns the global bet id counter.
#[account]
#[derive(Default)]
pub struct Registry {
    /// Key that initialized the registry.
    pub authority: Pubkey,

    /// Id the next started bet receives.
    pub next_bet_id: u64,

    /// Total bets started.
    pub total_bets: u64,

    /// Bump seed.
    pub bump: u8,
}

impl Registry {
    pub const SIZE: usize = 8  // discriminator
        + 32                    // authority
        + 8                     // next_bet_id
        + 8                     // total_bets
        + 1;                    // bump

    pub fn init(&mut self, authority: Pubkey, bump: u8) {
        self.authority = authority;
        self.next_bet_id = FIRST_BET_ID;
        self.total_bets = 0;
        self.bump = bump;
    }

    /// Hand out the next bet id and advance the counter.
    pub fn allocate_id(&mut self) -> Result<u64> {
        let id = self.next_bet_id;
        self.next_bet_id = id.checked_add(1).ok_or(BetError::Overflow)?;
        self.total_bets = self.total_bets.checked_add(1).ok_or(BetError::Overflow)?;
        Ok(id)
    }
}

/// ─── Bet Account ──────────────────────────────────────────────────
///
/// PDA: seeds = [b"bet", id.to_le_bytes()]
///
/// One betting round. Deposited lamports are custodied directly in this
/// account, on top of its rent-exempt reserve.
#[account]
#[derive(Default)]
pub struct Bet {
    /// Sequential identifier, starting at 1.
    pub id: u64,

    /// Creator of the bet and the only key allowed to end it.
    pub oracle: Pubkey,

    /// Current lifecycle state.
    pub state: BetState,

    /// Declared winner (only set when state == Ended).
    pub winning_position: Option<Position>,

    // ─── Pool accounting ───
    /// Total lamports staked on PositionA.
    pub pool_a: u64,

    /// Total lamports staked on PositionB.
    pub pool_b: u64,

    // ─── Claim state ───
    /// Winning-side stake whose winnings have already been claimed.
    pub claimed_stake: u64,

    /// Total lamports already paid out to winners.
    pub paid_out: u64,

    /// Number of successful claims.
    pub claims_count: u64,

    /// Bump seed.
    pub bump: u8,
}

impl Bet {
    pub const SIZE: usize = 8  // discriminator
        + 8                     // id
        + 32                    // oracle
        + 1                     // state
        + (1 + 1)               // winning_position
        + 8                     // pool_a
        + 8                     // pool_b
        + 8                     // claimed_stake
        + 8                     // paid_out
        + 8                     // claims_count
        + 1;                    // bump

    pub fn open(&mut self, id: u64, oracle: Pubkey, bump: u8) {
        self.id = id;
        self.oracle = oracle;
        self.state = BetState::Open;
        self.winning_position = None;
        self.pool_a = 0;
        self.pool_b = 0;
        self.claimed_stake = 0;
        self.paid_out = 0;
        self.claims_count = 0;
        self.bump = bump;
    }

    pub fn pool(&self, position: Position) -> u64 {
        match position {
            Position::PositionA => self.pool_a,
            Position::PositionB => self.pool_b,
        }
    }

    /// Lamports deposited and not yet paid out.
    ///
    /// `pool_a + pool_b` cannot wrap: `record_entry` rejects deposits that
    /// would overflow the combined pool.
    pub fn custodied(&self) -> u64 {
        (self.pool_a + self.pool_b).saturating_sub(self.paid_out)
    }

    /// Validate and record a new entry for `bettor`.
    ///
    /// `entry` is the bettor's entry slot; an `amount` of zero marks it as
    /// unused, since every accepted entry has a positive amount.
    pub fn record_entry(
        &mut self,
        entry: &mut Entry,
        bettor: Pubkey,
        position: Position,
        amount: u64,
    ) -> Result<()> {
        if bettor == self.oracle {
            msg!("Oracle cannot enter a bet (bet #{})", self.id);
            return err!(BetError::UnauthorizedCaller);
        }
        require!(amount > 0, BetError::InvalidAmount);
        require!(self.state == BetState::Open, BetError::BetClosed);
        require!(entry.amount == 0, BetError::DuplicateEntry);

        self.pool_a
            .checked_add(self.pool_b)
            .and_then(|total| total.checked_add(amount))
            .ok_or(BetError::Overflow)?;

        match position {
            Position::PositionA => {
                self.pool_a = self.pool_a.checked_add(amount).ok_or(BetError::Overflow)?;
            }
            Position::PositionB => {
                self.pool_b = self.pool_b.checked_add(amount).ok_or(BetError::Overflow)?;
            }
        }

        entry.bettor = bettor;
        entry.position = position;
        entry.amount = amount;
        entry.claimed = false;
        entry.payout = 0;

        Ok(())
    }

    /// Resolve the bet. Only the oracle may call this, exactly once.
    pub fn end(&mut self, caller: Pubkey, winning_position: Position) -> Result<()> {
        if caller != self.oracle {
            msg!("This address cannot end the bet: {} (bet #{})", caller, self.id);
            return err!(BetError::UnauthorizedCaller);
        }
        require!(self.state == BetState::Open, BetError::AlreadyEnded);

        self.winning_position = Some(winning_position);
        self.state = BetState::Ended;

        Ok(())
    }

    /// Calculate the pari-mutuel payout for a winning stake.
    ///
    /// payout = stake + stake × loser_pool / winner_pool
    ///
    /// The division floors, so the sum over all winners never exceeds the
    /// combined pool.
    pub fn calculate_payout(&self, stake: u64) -> Result<u64> {
        let winner = self.winning_position.ok_or(BetError::BetNotEnded)?;
        let profit = self.loser_share(winner, stake)?;

        stake.checked_add(profit).ok_or(BetError::Overflow.into())
    }

    /// floor(stake × loser_pool / winner_pool)
    fn loser_share(&self, winner: Position, stake: u64) -> Result<u64> {
        let winner_pool = self.pool(winner);
        let loser_pool = self.pool(winner.opposite());

        require!(winner_pool > 0, BetError::NotAWinner);

        let share = (stake as u128)
            .checked_mul(loser_pool as u128)
            .ok_or(BetError::Overflow)?
            / winner_pool as u128;

        u64::try_from(share).map_err(|_| BetError::Overflow.into())
    }

    /// Validate a claim against `entry` and mark it paid.
    ///
    /// Profit is measured on the cumulative claimed stake:
    ///
    ///   profit = share(claimed_stake + stake) - share(claimed_stake)
    ///
    /// so every payout is within one lamport of `calculate_payout`, and the
    /// loser pool is exactly exhausted once every winner has claimed.
    pub fn settle_claim(&mut self, entry: &mut Entry) -> Result<u64> {
        require!(self.state == BetState::Ended, BetError::BetNotEnded);
        let winner = self.winning_position.ok_or(BetError::BetNotEnded)?;

        require!(
            entry.amount > 0 && entry.position == winner,
            BetError::NotAWinner
        );
        require!(!entry.claimed, BetError::AlreadyClaimed);

        let claimed_stake = self
            .claimed_stake
            .checked_add(entry.amount)
            .ok_or(BetError::Overflow)?;
        let profit = self
            .loser_share(winner, claimed_stake)?
            .checked_sub(self.loser_share(winner, self.claimed_stake)?)
            .ok_or(BetError::Overflow)?;
        let payout = entry.amount.checked_add(profit).ok_or(BetError::Overflow)?;
        require!(payout <= self.custodied(), BetError::VaultInsolvency);

        self.claimed_stake = claimed_stake;
        self.paid_out = self.paid_out.checked_add(payout).ok_or(BetError::Overflow)?;
        self.claims_count = self.claims_count.checked_add(1).ok_or(BetError::Overflow)?;

        entry.claimed = true;
        entry.payout = payout;

        Ok(payout)
    }
}

/// ─── Bet State ────────────────────────────────────────────────────
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum BetState {
    /// Accepting entries.
    #[default]
    Open,

    /// Winner declared; claims open.
    Ended,
}

/// ─── Position ─────────────────────────────────────────────────────
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Position {
    PositionA,
    PositionB,
}

impl Position {
    pub fn opposite(self) -> Self {
        match self {
            Position::PositionA => Position::PositionB,
            Position::PositionB => Position::PositionA,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::PositionA
    }
}

/// ─── Entry ────────────────────────────────────────────────────────
///
/// PDA: seeds = [b"entry", bet.key, bettor.key]
///
/// A bettor's single stake in a specific bet.
#[account]
#[derive(Default)]
pub struct Entry {
    /// The bet this entry belongs to.
    pub bet: Pubkey,

    /// The bettor who owns this entry.
    pub bettor: Pubkey,

    /// Side backed.
    pub position: Position,

    /// Lamports staked.
    pub amount: u64,

    /// Whether winnings have been withdrawn.
    pub claimed: bool,

    /// Amount paid out (set on claim).
    pub payout: u64,

    /// Bump seed.
    pub bump: u8,
}

impl Entry {
    pub const SIZE: usize = 8  // discriminator
        + 32                    // bet
        + 32                    // bettor
        + 1                     // position
        + 8                     // amount
        + 1                     // claimed
        + 8                     // payout
        + 1;                    // bump
}
