//! Data access layer
//!
//! One repository per table; all methods are static and take the pool
//! explicitly.

mod matches;
mod players;
mod teams;
mod user;

pub use matches::{MatchRecord, MatchRepository, NewMatch};
pub use players::{PlayerRepository, UpdatePlayer};
pub use teams::TeamRepository;
pub use user::{UserRecord, UserRepository};
