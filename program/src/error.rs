//! Error types

use {
    num_derive::FromPrimitive,
    solana_program::{decode_error::DecodeError, program_error::ProgramError},
    thiserror::Error,
};

/// Errors that may be returned by the program.
#[derive(Clone, Copy, Debug, Eq, Error, FromPrimitive, PartialEq)]
pub enum DoorsVsWheelsError {
    /// The votes counter already exists
    #[error("Votes counter is already initialized")]
    AlreadyInitialized,

    /// Voting before the votes counter was created
    #[error("Votes counter is not initialized")]
    NotInitialized,

    /// Supplied account is not the one derived by the program
    #[error("Account does not match the program derived address")]
    UnauthorizedAccount,

    /// The voter already holds a vote record
    #[error("Voter has already voted")]
    AlreadyVoted,

    /// Balance below the service fee plus rent
    #[error("Insufficient lamports to pay the voting fee and rent")]
    InsufficientFunds,

    /// The paying account has never been credited
    #[error("Attempt to debit an account but found no record of a prior credit")]
    NoPriorPresence,

    /// Invalid instruction
    #[error("Invalid instruction")]
    InvalidInstruction,

    /// Vote option is neither doors nor wheels
    #[error("Invalid vote option")]
    InvalidVoteOption,

    /// Tally would overflow
    #[error("Tally overflow")]
    ArithmeticOverflow,

    /// No bump seed produced an off-curve address
    #[error("Unable to derive a program address from the configured seeds")]
    AddressDerivationFailed,
}

impl From<DoorsVsWheelsError> for ProgramError {
    fn from(e: DoorsVsWheelsError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl<T> DecodeError<T> for DoorsVsWheelsError {
    fn type_of() -> &'static str {
        "Doors vs Wheels Error"
    }
}
