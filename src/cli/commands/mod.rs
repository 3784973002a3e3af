pub mod detect;
pub mod duplicate;
pub mod export;
pub mod helper;
pub mod import;
pub mod init;
pub mod script;

mod command_result;

pub use command_result::*;
