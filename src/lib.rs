pub mod assign;
pub mod clause;
pub mod config;
pub mod dispatch;
pub mod emit;
pub mod error;
pub mod evidence;
pub mod ground;
pub mod metrics;
pub mod order;
pub mod pool;
pub mod registry;
pub mod symbol;
pub mod term;
pub mod trace;

#[cfg(test)]
pub(crate) mod test_utils;
