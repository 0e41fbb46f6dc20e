pub mod auth;
pub mod contact;
pub mod dashboard;
pub mod newsletter;
