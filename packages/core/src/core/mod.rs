// Scoped title override: the sink abstraction, the controller that
// saves/restores through it, and the handle/guard types it hands out.

pub mod config;
pub mod controller;
pub mod guard;
pub mod handle;
pub mod sink;
