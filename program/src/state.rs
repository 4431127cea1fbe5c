//! Program state

use bytemuck::{Pod, Zeroable};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use solana_program::account_info::AccountInfo;
use solana_program::program_error::ProgramError;
use solana_program::rent::Rent;
use spl_pod::primitives::PodU64;

use crate::error::DoorsVsWheelsError;

#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

#[cfg(not(target_os = "solana"))]
use solana_account::{AccountSharedData, WritableAccount};

/// Tag stored in the first byte of every program account
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum AccountType {
    /// Zeroed buffer, never written by the program
    Uninitialized,
    /// The global tally
    VotesCounter,
    /// A per-voter record
    UserVote,
}

/// The two sides of the vote
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum VoteOption {
    /// Doors
    Doors,
    /// Wheels
    Wheels,
}

impl TryFrom<&[u8]> for VoteOption {
    type Error = ProgramError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        match data {
            [option] => VoteOption::try_from(*option)
                .map_err(|_| DoorsVsWheelsError::InvalidVoteOption.into()),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}

/// The global tally. One per program deployment, stored at the
/// `votes_counter` program derived address.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable, Default, PartialEq)]
pub struct VotesCounter {
    pub(crate) account_type: u8,

    /// Bump seed of the counter address
    pub(crate) bump: u8,

    pub(crate) wheels: PodU64,

    pub(crate) doors: PodU64,
}

impl VotesCounter {
    pub(crate) fn new(bump: u8) -> Self {
        Self {
            account_type: AccountType::VotesCounter.into(),
            bump,
            ..Self::default()
        }
    }

    /// The size of the account that stores a `VotesCounter`
    pub const fn size() -> usize {
        std::mem::size_of::<VotesCounter>()
    }

    /// Lamports needed for the counter account to be rent exempt
    pub fn get_rent_exempt_reserve(rent: &Rent) -> u64 {
        rent.minimum_balance(Self::size())
    }

    /// Return whether the counter holds live state
    pub fn is_initialized(&self) -> bool {
        self.account_type == u8::from(AccountType::VotesCounter)
    }

    /// Deserialize a counter from account data.
    /// Callers can use this with the `data` field from an `AccountInfo`
    pub fn deserialize(data: &[u8]) -> Result<&VotesCounter, ProgramError> {
        let counter = spl_pod::bytemuck::pod_from_bytes::<VotesCounter>(data)?;
        if !counter.is_initialized() {
            return Err(ProgramError::UninitializedAccount);
        }
        Ok(counter)
    }

    /// Serializes the counter into an output buffer
    pub(crate) fn set_account_state(
        account: &AccountInfo,
        counter: &VotesCounter,
    ) -> Result<(), ProgramError> {
        account
            .try_borrow_mut_data()?
            .copy_from_slice(bytemuck::bytes_of(counter));
        Ok(())
    }

    /// Copy of this counter with one more vote for `option`
    pub(crate) fn with_vote(&self, option: VoteOption) -> Result<Self, ProgramError> {
        let increment = |count: PodU64| {
            u64::from(count)
                .checked_add(1)
                .map(PodU64::from)
                .ok_or(ProgramError::from(DoorsVsWheelsError::ArithmeticOverflow))
        };
        let mut next = *self;
        match option {
            VoteOption::Doors => next.doors = increment(self.doors)?,
            VoteOption::Wheels => next.wheels = increment(self.wheels)?,
        }
        Ok(next)
    }

    /// Votes for wheels
    pub fn wheels(&self) -> u64 {
        u64::from(self.wheels)
    }

    /// Votes for doors
    pub fn doors(&self) -> u64 {
        u64::from(self.doors)
    }

    /// Votes cast on either side
    pub fn total(&self) -> u64 {
        self.wheels().saturating_add(self.doors())
    }

    /// Bump seed of the counter address
    pub fn bump(&self) -> u8 {
        self.bump
    }

    /// Create a counter with the given tally and wrap it in an account
    #[cfg(not(target_os = "solana"))]
    pub fn create_account(lamports: u64, bump: u8, wheels: u64, doors: u64) -> AccountSharedData {
        let mut account = AccountSharedData::new(lamports, Self::size(), &crate::id());
        let counter = Self {
            wheels: PodU64::from(wheels),
            doors: PodU64::from(doors),
            ..Self::new(bump)
        };
        account
            .data_as_mut_slice()
            .copy_from_slice(bytemuck::bytes_of(&counter));
        account
    }
}

/// Record of a single voter's choice, stored at the `user_vote` program
/// derived address of that voter. Its existence means the voter has voted.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable, Default, PartialEq)]
pub struct UserVote {
    pub(crate) account_type: u8,

    /// Bump seed of the record address
    pub(crate) bump: u8,

    pub(crate) vote: u8,
}

impl UserVote {
    pub(crate) fn new(bump: u8, vote: VoteOption) -> Self {
        Self {
            account_type: AccountType::UserVote.into(),
            bump,
            vote: vote.into(),
        }
    }

    /// The size of the account that stores a `UserVote`
    pub const fn size() -> usize {
        std::mem::size_of::<UserVote>()
    }

    /// Lamports needed for a vote record to be rent exempt
    pub fn get_rent_exempt_reserve(rent: &Rent) -> u64 {
        rent.minimum_balance(Self::size())
    }

    /// Return whether the record holds live state
    pub fn is_initialized(&self) -> bool {
        self.account_type == u8::from(AccountType::UserVote)
    }

    /// Deserialize a vote record from account data
    pub fn deserialize(data: &[u8]) -> Result<&UserVote, ProgramError> {
        let user_vote = spl_pod::bytemuck::pod_from_bytes::<UserVote>(data)?;
        if !user_vote.is_initialized() {
            return Err(ProgramError::UninitializedAccount);
        }
        Ok(user_vote)
    }

    pub(crate) fn set_account_state(
        account: &AccountInfo,
        user_vote: &UserVote,
    ) -> Result<(), ProgramError> {
        account
            .try_borrow_mut_data()?
            .copy_from_slice(bytemuck::bytes_of(user_vote));
        Ok(())
    }

    /// The recorded choice
    pub fn vote(&self) -> Result<VoteOption, ProgramError> {
        VoteOption::try_from(self.vote).map_err(|_| ProgramError::InvalidAccountData)
    }

    /// Bump seed of the record address
    pub fn bump(&self) -> u8 {
        self.bump
    }

    /// Create a vote record and wrap it in an account
    #[cfg(not(target_os = "solana"))]
    pub fn create_account(lamports: u64, bump: u8, vote: VoteOption) -> AccountSharedData {
        let mut account = AccountSharedData::new(lamports, Self::size(), &crate::id());
        account
            .data_as_mut_slice()
            .copy_from_slice(bytemuck::bytes_of(&Self::new(bump, vote)));
        account
    }
}
