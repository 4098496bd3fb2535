pub mod gpg_backend;
