pub mod git_identity;
