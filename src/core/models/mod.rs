pub mod fingerprint;
pub mod plaintext;
pub mod recipients;
