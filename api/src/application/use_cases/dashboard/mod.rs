pub mod admin_overview;
