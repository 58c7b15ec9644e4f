//! Observable behaviour of the file-backed store, end to end through the
//! public facade.

#[path = "../common/mod.rs"]
mod common;

mod corruption;
mod persistence;
mod records;
mod round_trip;
