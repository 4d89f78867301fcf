pub mod aggregate;
pub mod classify;
pub mod partition;
pub mod window;
