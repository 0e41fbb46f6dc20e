pub mod login;
pub mod logout;
pub mod register;
pub mod resolve_session;
pub mod set_password;
