//! Deployed configuration shared by the program and its clients

/// Seed of the global tally account
pub const VOTES_COUNTER_SEED: &[u8] = b"votes_counter";

/// Seed prefix of the per-voter record, followed by the voter's pubkey
pub const USER_VOTE_SEED: &[u8] = b"user_vote";

/// Service fee, in lamports, moved from the voter to the votes counter
/// account on every accepted vote
pub const VOTING_FEE_LAMPORTS: u64 = 201_612;
