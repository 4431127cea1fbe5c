//! Program state processor

use num_traits::FromPrimitive;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
    rent::Rent,
    sysvar::Sysvar,
};

use crate::accounting;
use crate::constants::{USER_VOTE_SEED, VOTES_COUNTER_SEED, VOTING_FEE_LAMPORTS};
use crate::error::DoorsVsWheelsError;
use crate::instruction::{decode_instruction_data, decode_instruction_type, VotingInstruction};
use crate::pda;
use crate::state::{UserVote, VoteOption, VotesCounter};

/// Instruction processor
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    input: &[u8],
) -> ProgramResult {
    process(program_id, accounts, input).inspect_err(log_error)
}

fn process(program_id: &Pubkey, accounts: &[AccountInfo], input: &[u8]) -> ProgramResult {
    let instruction_type = decode_instruction_type(input)?;
    let account_info_iter = &mut accounts.iter();

    match instruction_type {
        VotingInstruction::Initialize => {
            msg!("Instruction: Initialize");
            if !decode_instruction_data(input).is_empty() {
                return Err(ProgramError::InvalidInstructionData);
            }

            let payer = next_account_info(account_info_iter)?;
            let votes_counter = next_account_info(account_info_iter)?;
            let system_program = next_account_info(account_info_iter)?;
            accounting::check_system_program(system_program)?;

            if payer.signer_key().is_none() {
                return Err(ProgramError::MissingRequiredSignature);
            }

            process_initialize(program_id, payer, votes_counter, system_program)
        }
        VotingInstruction::Vote => {
            msg!("Instruction: Vote");
            let option = VoteOption::try_from(decode_instruction_data(input))?;

            let voter = next_account_info(account_info_iter)?;
            let votes_counter = next_account_info(account_info_iter)?;
            let user_vote = next_account_info(account_info_iter)?;
            let system_program = next_account_info(account_info_iter)?;
            accounting::check_system_program(system_program)?;

            if voter.signer_key().is_none() {
                return Err(ProgramError::MissingRequiredSignature);
            }

            process_vote(
                program_id,
                voter,
                votes_counter,
                user_vote,
                system_program,
                option,
            )
        }
    }
}

/// Create the votes counter at its program derived address
pub(crate) fn process_initialize<'a>(
    program_id: &Pubkey,
    payer: &AccountInfo<'a>,
    votes_counter: &AccountInfo<'a>,
    system_program: &AccountInfo<'a>,
) -> ProgramResult {
    let bump = pda::check_votes_counter_address(program_id, votes_counter.key)?;

    if accounting::is_claimed(votes_counter, program_id) {
        return Err(DoorsVsWheelsError::AlreadyInitialized.into());
    }

    let rent = Rent::get()?;
    accounting::check_payer_funds(
        payer,
        &rent,
        accounting::rent_shortfall(&rent, VotesCounter::size(), votes_counter),
    )?;

    accounting::create_pda_account(
        payer,
        &rent,
        VotesCounter::size(),
        program_id,
        system_program,
        votes_counter,
        &[VOTES_COUNTER_SEED, &[bump]],
    )?;
    VotesCounter::set_account_state(votes_counter, &VotesCounter::new(bump))?;

    msg!("Votes counter initialized: {}", votes_counter.key);
    Ok(())
}

/// Record `option` for `voter`, charge the voting fee and bump the tally.
/// Every check runs before the first write.
pub(crate) fn process_vote<'a>(
    program_id: &Pubkey,
    voter: &AccountInfo<'a>,
    votes_counter: &AccountInfo<'a>,
    user_vote: &AccountInfo<'a>,
    system_program: &AccountInfo<'a>,
    option: VoteOption,
) -> ProgramResult {
    pda::check_votes_counter_address(program_id, votes_counter.key)?;
    let user_vote_bump = pda::check_user_vote_address(program_id, voter.key, user_vote.key)?;

    if !accounting::is_claimed(votes_counter, program_id) {
        return Err(DoorsVsWheelsError::NotInitialized.into());
    }
    let tally = VotesCounter::deserialize(&votes_counter.try_borrow_data()?)
        .copied()
        .map_err(|_| DoorsVsWheelsError::NotInitialized)?;

    if accounting::is_claimed(user_vote, program_id) {
        return Err(DoorsVsWheelsError::AlreadyVoted.into());
    }

    let rent = Rent::get()?;
    let required = accounting::rent_shortfall(&rent, UserVote::size(), user_vote)
        .checked_add(VOTING_FEE_LAMPORTS)
        .ok_or(DoorsVsWheelsError::ArithmeticOverflow)?;
    accounting::check_payer_funds(voter, &rent, required)?;

    let tally = tally.with_vote(option)?;

    accounting::create_pda_account(
        voter,
        &rent,
        UserVote::size(),
        program_id,
        system_program,
        user_vote,
        &[USER_VOTE_SEED, voter.key.as_ref(), &[user_vote_bump]],
    )?;
    UserVote::set_account_state(user_vote, &UserVote::new(user_vote_bump, option))?;

    accounting::transfer_fee(voter, votes_counter, system_program, VOTING_FEE_LAMPORTS)?;

    VotesCounter::set_account_state(votes_counter, &tally)?;

    msg!(
        "Vote recorded: {:?} by {} (wheels: {}, doors: {})",
        option,
        voter.key,
        tally.wheels(),
        tally.doors()
    );
    Ok(())
}

fn log_error(error: &ProgramError) {
    match error {
        ProgramError::Custom(code) => match DoorsVsWheelsError::from_u32(*code) {
            Some(error) => msg!("Error: {}", error),
            None => msg!("Error: custom program error {:#x}", code),
        },
        error => msg!("Error: {}", error),
    }
}
