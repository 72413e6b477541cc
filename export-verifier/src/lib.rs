//! Exports the on-chain verifier contracts, splicing the verifying key
//! emitted by the proving toolchain into the hand-written verifier templates.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
pub mod commands;
pub mod constants;
pub mod errors;
pub mod template;
pub mod utils;
pub mod vkey;
