mod command_result;
pub mod init;
pub mod merge;
pub mod status;
pub mod synchronize;

pub use command_result::*;
