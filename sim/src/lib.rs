//! Simulation core for the wavewalk client.
//!
//! Everything in here runs headless: the locomotion integrator, the
//! downward ground probe and the wave parameter set have no dependency on
//! windowing or rendering, so the whole per-frame state machine is unit
//! tested without spinning up an app.

pub mod constants;
pub mod input;
pub mod locomotion;
pub mod probe;
pub mod waves;

pub use constants::*;
