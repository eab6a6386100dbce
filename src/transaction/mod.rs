//! Structured mutation outcomes.
//!
//! Offering data to a host never panics and never silently overwrites: it
//! answers with a [`DataTransactionResult`] recording what was replaced,
//! what was rejected and what was applied.

mod builder;
mod result;

pub use builder::DataTransactionBuilder;
pub use result::{DataTransactionResult, TransactionType};
