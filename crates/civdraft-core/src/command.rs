//! Command abstractions.

use uuid::Uuid;

/// A state-changing request issued by the command surface (a roll or a ban).
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Stable command name, e.g. `draft.roll`, used in log fields.
    fn command_type(&self) -> &'static str;

    /// Correlation ID tying the command to the request that issued it.
    fn correlation_id(&self) -> Uuid;
}
