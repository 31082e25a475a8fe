//! API endpoint handlers.

pub mod check;
pub mod health;
pub mod reference;
pub mod root;
pub mod seed;
