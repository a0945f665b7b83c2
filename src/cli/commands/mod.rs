mod command_result;
pub mod init;
pub mod report;

pub use command_result::*;
