/// Single ant state machine
pub mod ant;
/// Wall clock abstraction
pub mod clock;
/// Live ant collection and synchronized tick
pub mod colony;
/// Run lifecycle controller
pub mod executor;
