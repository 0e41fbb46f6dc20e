pub mod accounts;
pub mod contact;
pub mod newsletter;
pub mod transit;
