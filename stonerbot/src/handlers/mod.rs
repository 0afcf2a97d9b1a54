//! Message handlers, in dispatch order: location, usage, strain search, unknown-command usage.
//!
//! Handlers only compute the reply; [`ReplySender`] delivers it in the chain's after phase.

mod location;
mod reply;
mod strains;
mod usage;

pub use location::LocationHandler;
pub use reply::ReplySender;
pub use strains::StrainSearchHandler;
pub use usage::UsageHandler;
