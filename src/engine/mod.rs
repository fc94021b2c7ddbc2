//! The monster decision engine
//!
//! Composes passability, pathfinding, targeting, flanking, and abilities
//! into one decision per creature per round, then applies a whole round at
//! a time through the turn processor.

pub mod abilities;
pub mod constants;
pub mod decision;
pub mod flanking;
pub mod messages;
pub mod passability;
pub mod pathfinding;
pub mod targeting;
pub mod turn;

pub use decision::{decide, Action, Decision, DecisionContext};
pub use turn::{AttackRecord, SpecialEvent, TurnEngine, TurnOutcome};
