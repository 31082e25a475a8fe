pub mod check;
pub mod dispatch;
pub mod seed;
pub mod serve;
pub mod substances;
pub mod symptoms;
