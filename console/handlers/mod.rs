pub mod dataset;
pub mod help;
pub mod info;
pub mod network;
pub mod query;
pub mod train;
