pub mod change_detector;
pub mod decryption_service;
pub mod edit_session;
pub mod editor_service;
pub mod encryption_service;
