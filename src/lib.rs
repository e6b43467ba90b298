//! Extracts the ship records from a type-id dump.
//!
//! The dump is a UTF-16 JSON object mapping type id → type attributes.  A
//! record is kept when its `groupID` is one of the compiled-in ship groups
//! ([`data::allow_list::AllowList::ships`]); kept records are written out
//! unchanged as ASCII JSON.

pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;

pub use config::Config;
pub use error::FilterError;
pub use pipeline::{run, RunSummary};
