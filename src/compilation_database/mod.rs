mod compile_command;
mod json_database;

pub use compile_command::{CompileCommand, CompileCommands, UNIFIED_SOURCE_PREFIX};
pub use json_database::{parse_compile_database, write_compile_database};
