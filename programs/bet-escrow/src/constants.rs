use anchor_lang::prelude::*;

/// PDA Seeds
#[constant]
pub const REGISTRY_SEED: &[u8] = b"registry";
#[constant]
pub const BET_SEED: &[u8] = b"bet";
#[constant]
pub const ENTRY_SEED: &[u8] = b"entry";

/// Id assigned to the first bet ever started.
#[constant]
pub const FIRST_BET_ID: u64 = 1;
