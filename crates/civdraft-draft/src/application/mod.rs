//! Application layer for the Draft context.

pub mod command_handlers;
pub mod query_handlers;
pub mod replies;
