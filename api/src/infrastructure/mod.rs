pub mod crypto;
pub mod db;
pub mod mail;
pub mod sessions;
