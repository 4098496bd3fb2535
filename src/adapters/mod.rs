pub mod cipher;
pub mod git;
pub mod process;
