//! Menu command invocation.
//!
//! [`CommandDispatcher`] renders every line of a command against a snapshot
//! of the host selection and commits the batch to the
//! [`CommandSender`](crate::client::CommandSender)
//! only when all of it rendered.

mod dispatcher;

pub use dispatcher::{
    CommandDispatcher, DispatcherStats, DispatcherStatsSnapshot, InvocationOutcome,
};
