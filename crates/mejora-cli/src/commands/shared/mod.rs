pub mod limit;
pub mod listing;
pub mod parse;
pub mod remote;
