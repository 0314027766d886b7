pub mod add;
pub mod calculator;
pub mod config;
pub mod del;
pub mod document;
pub mod input;
pub mod logic;
pub mod session;

pub use session::Session;
