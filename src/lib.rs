pub mod cqueue;
pub mod display;
pub mod engine;
pub mod slist;
