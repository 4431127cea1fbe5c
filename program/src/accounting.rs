//! Lamport movements and account creation on behalf of the program

use solana_program::account_info::AccountInfo;
use solana_program::entrypoint::ProgramResult;
use solana_program::program::{invoke, invoke_signed};
use solana_program::program_error::ProgramError;
use solana_program::pubkey::Pubkey;
use solana_program::rent::Rent;
use solana_system_interface::instruction as system_instruction;

use crate::error::DoorsVsWheelsError;

/// Lamports a program derived account still needs to become rent exempt at
/// `space` bytes. A pre-funded address only needs the difference.
pub(crate) fn rent_shortfall(rent: &Rent, space: usize, pda: &AccountInfo) -> u64 {
    rent.minimum_balance(space)
        .max(1)
        .saturating_sub(pda.lamports())
}

/// Check that `payer` can spend `required` lamports. A payer that was never
/// credited is reported separately from one that is merely short.
/// Whatever is left must be zero or keep the payer rent exempt.
pub(crate) fn check_payer_funds(
    payer: &AccountInfo,
    rent: &Rent,
    required: u64,
) -> ProgramResult {
    let balance = payer.lamports();
    if balance == 0 {
        return Err(DoorsVsWheelsError::NoPriorPresence.into());
    }
    let remaining = balance
        .checked_sub(required)
        .ok_or(DoorsVsWheelsError::InsufficientFunds)?;
    if remaining != 0 && remaining < rent.minimum_balance(payer.data_len()) {
        return Err(DoorsVsWheelsError::InsufficientFunds.into());
    }
    Ok(())
}

/// An address is taken once the program owns it. System owned addresses,
/// funded or not, can still be claimed.
pub(crate) fn is_claimed(account: &AccountInfo, program_id: &Pubkey) -> bool {
    account.owner == program_id
}

/// Create a rent exempt account at a program derived address, owned by
/// `owner`. The system program refuses to create over an occupied address.
/// An address that only holds lamports is topped up, allocated and assigned.
pub(crate) fn create_pda_account<'a>(
    payer: &AccountInfo<'a>,
    rent: &Rent,
    space: usize,
    owner: &Pubkey,
    system_program: &AccountInfo<'a>,
    new_pda_account: &AccountInfo<'a>,
    new_pda_signer_seeds: &[&[u8]],
) -> ProgramResult {
    if new_pda_account.lamports() > 0 {
        let required_lamports = rent_shortfall(rent, space, new_pda_account);

        if required_lamports > 0 {
            invoke(
                &system_instruction::transfer(payer.key, new_pda_account.key, required_lamports),
                &[
                    payer.clone(),
                    new_pda_account.clone(),
                    system_program.clone(),
                ],
            )?;
        }

        invoke_signed(
            &system_instruction::allocate(new_pda_account.key, space as u64),
            &[new_pda_account.clone(), system_program.clone()],
            &[new_pda_signer_seeds],
        )?;

        invoke_signed(
            &system_instruction::assign(new_pda_account.key, owner),
            &[new_pda_account.clone(), system_program.clone()],
            &[new_pda_signer_seeds],
        )
    } else {
        invoke_signed(
            &system_instruction::create_account(
                payer.key,
                new_pda_account.key,
                rent.minimum_balance(space).max(1),
                space as u64,
                owner,
            ),
            &[
                payer.clone(),
                new_pda_account.clone(),
                system_program.clone(),
            ],
            &[new_pda_signer_seeds],
        )
    }
}

/// Move the voting fee from the voter to the votes counter
pub(crate) fn transfer_fee<'a>(
    voter: &AccountInfo<'a>,
    votes_counter: &AccountInfo<'a>,
    system_program: &AccountInfo<'a>,
    lamports: u64,
) -> ProgramResult {
    invoke(
        &system_instruction::transfer(voter.key, votes_counter.key, lamports),
        &[
            voter.clone(),
            votes_counter.clone(),
            system_program.clone(),
        ],
    )
}

/// Reject anything but the system program where it is expected
pub(crate) fn check_system_program(system_program: &AccountInfo) -> ProgramResult {
    if *system_program.key != solana_system_interface::program::id() {
        return Err(ProgramError::IncorrectProgramId);
    }
    Ok(())
}
