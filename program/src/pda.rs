//! Program derived addresses for the votes counter and the per-voter records

use solana_program::{program_error::ProgramError, pubkey::Pubkey};

use crate::constants::{USER_VOTE_SEED, VOTES_COUNTER_SEED};
use crate::error::DoorsVsWheelsError;

fn find_address(seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8), ProgramError> {
    Pubkey::try_find_program_address(seeds, program_id)
        .ok_or_else(|| DoorsVsWheelsError::AddressDerivationFailed.into())
}

/// Derive the votes counter address and its bump seed
pub fn find_votes_counter_address(program_id: &Pubkey) -> Result<(Pubkey, u8), ProgramError> {
    find_address(&[VOTES_COUNTER_SEED], program_id)
}

/// Derive the vote record address of `voter` and its bump seed
pub fn find_user_vote_address(
    voter: &Pubkey,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), ProgramError> {
    find_address(&[USER_VOTE_SEED, voter.as_ref()], program_id)
}

/// Votes counter address for clients that do not need the bump
///
/// # Panics
///
/// Panics if no bump seed yields an off-curve address. Use
/// [`find_votes_counter_address`] to handle that case.
pub fn get_votes_counter_address(program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[VOTES_COUNTER_SEED], program_id).0
}

/// Vote record address of `voter` for clients that do not need the bump
///
/// # Panics
///
/// Panics if no bump seed yields an off-curve address. Use
/// [`find_user_vote_address`] to handle that case.
pub fn get_user_vote_address(voter: &Pubkey, program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[USER_VOTE_SEED, voter.as_ref()], program_id).0
}

/// Recompute the votes counter address and compare it with the supplied key.
/// Returns the bump on success.
pub(crate) fn check_votes_counter_address(
    program_id: &Pubkey,
    supplied: &Pubkey,
) -> Result<u8, ProgramError> {
    let (expected, bump) = find_votes_counter_address(program_id)?;
    if expected != *supplied {
        return Err(DoorsVsWheelsError::UnauthorizedAccount.into());
    }
    Ok(bump)
}

/// Recompute the vote record address of `voter` and compare it with the
/// supplied key. Returns the bump on success.
pub(crate) fn check_user_vote_address(
    program_id: &Pubkey,
    voter: &Pubkey,
    supplied: &Pubkey,
) -> Result<u8, ProgramError> {
    let (expected, bump) = find_user_vote_address(voter, program_id)?;
    if expected != *supplied {
        return Err(DoorsVsWheelsError::UnauthorizedAccount.into());
    }
    Ok(bump)
}
