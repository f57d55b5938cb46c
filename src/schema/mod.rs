//! Read-only queries against the four remote relations.
//!
//! Every function here either counts rows without materializing them or
//! fetches the few columns the report layer aggregates in memory. There
//! is no write path anywhere in this service.

pub mod communities;
pub mod posts;
pub mod roles;
pub mod users;

pub use posts::PostAuthorRow;
pub use roles::RoleCommunityRow;
