pub mod cipher;
pub mod identity;
pub mod process;
