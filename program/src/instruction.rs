//! Program instructions

use {
    crate::{error::DoorsVsWheelsError, id, pda, state::VoteOption},
    num_enum::{IntoPrimitive, TryFromPrimitive},
    solana_program::{
        instruction::{AccountMeta, Instruction},
        program_error::ProgramError,
        pubkey::Pubkey,
    },
};

/// Instructions supported by the program
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, TryFromPrimitive, IntoPrimitive)]
pub enum VotingInstruction {
    /// Create the votes counter with both tallies at zero.
    ///
    /// Accounts expected by this instruction:
    ///
    ///   0. `[signer, writable]` Payer of the counter's rent
    ///   1. `[writable]` Votes counter, the `votes_counter` program derived
    ///      address
    ///   2. `[]` System program
    Initialize,

    /// Cast a vote. Charges the voting fee, records the voter's choice and
    /// increments the matching tally.
    ///
    /// Accounts expected by this instruction:
    ///
    ///   0. `[signer, writable]` Voter
    ///   1. `[writable]` Votes counter
    ///   2. `[writable]` Vote record, the `user_vote` program derived address
    ///      of the voter
    ///   3. `[]` System program
    ///
    /// Data: a single `VoteOption` byte
    Vote,
}

/// Utility function for encoding instruction data
pub(crate) fn encode_instruction(
    accounts: Vec<AccountMeta>,
    instruction: VotingInstruction,
    instruction_data: &[u8],
) -> Instruction {
    let mut data = vec![u8::from(instruction)];
    data.extend_from_slice(instruction_data);
    Instruction {
        program_id: id(),
        accounts,
        data,
    }
}

/// Utility function for decoding just the instruction type
pub(crate) fn decode_instruction_type(input: &[u8]) -> Result<VotingInstruction, ProgramError> {
    if input.is_empty() {
        Err(ProgramError::InvalidInstructionData)
    } else {
        VotingInstruction::try_from(input[0])
            .map_err(|_| DoorsVsWheelsError::InvalidInstruction.into())
    }
}

/// Utility function for decoding the payload that follows the instruction type
pub(crate) fn decode_instruction_data(input_with_type: &[u8]) -> &[u8] {
    input_with_type.get(1..).unwrap_or_default()
}

/// Create an `Initialize` instruction
pub fn initialize(payer: Pubkey) -> Instruction {
    let accounts = vec![
        AccountMeta::new(payer, true),
        AccountMeta::new(pda::get_votes_counter_address(&id()), false),
        AccountMeta::new_readonly(solana_system_interface::program::id(), false),
    ];
    encode_instruction(accounts, VotingInstruction::Initialize, &[])
}

/// Create a `Vote` instruction for `voter`, deriving both program accounts
pub fn vote(voter: Pubkey, option: VoteOption) -> Instruction {
    vote_with_accounts(
        voter,
        option,
        pda::get_votes_counter_address(&id()),
        pda::get_user_vote_address(&voter, &id()),
    )
}

/// Create a `Vote` instruction with caller supplied program accounts
pub fn vote_with_accounts(
    voter: Pubkey,
    option: VoteOption,
    votes_counter: Pubkey,
    user_vote: Pubkey,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new(voter, true),
        AccountMeta::new(votes_counter, false),
        AccountMeta::new(user_vote, false),
        AccountMeta::new_readonly(solana_system_interface::program::id(), false),
    ];
    encode_instruction(accounts, VotingInstruction::Vote, &[u8::from(option)])
}
