//! Command implementations behind the `klavyetool` binary.

pub mod commands;
