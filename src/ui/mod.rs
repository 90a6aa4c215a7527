pub mod mvi;
pub mod scheduler;
