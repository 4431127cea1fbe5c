//! Doors vs Wheels vote program
#![deny(missing_docs)]

mod accounting;
mod entrypoint;
pub mod constants;
pub mod error;
pub mod instruction;
pub mod pda;
pub mod processor;
pub mod state;

// Export current SDK types for downstream users building with a different SDK
// version
pub use solana_program;

solana_program::declare_id!("5pqnMDYsTfRAU1egcXoKgD8XrMy3yPUTDz9GMDCyvU8t");
