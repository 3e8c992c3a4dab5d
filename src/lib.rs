//! Terminal snake (workspace facade crate).
//!
//! Re-exports the member crates under short module names so binaries, tests
//! and benches can use `snake_loop::{core,engine,input,term,types}`.

pub use snake_loop_core as core;
pub use snake_loop_engine as engine;
pub use snake_loop_input as input;
pub use snake_loop_term as term;
pub use snake_loop_types as types;
