//! Console commands: parsing into a closed set of tags and dispatching
//! each tag to the directory.

mod command;
mod router;

pub use command::Command;
pub use router::{CommandRouter, Reply};
