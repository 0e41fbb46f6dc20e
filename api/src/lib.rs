// Module layout (Clean Architecture style)
// - bootstrap: configuration and startup
// - infrastructure: DB/session/mail/crypto adapters
// - presentation: HTTP handlers, cookies and HTML views
// - application: ports, use cases, access guards, credentials
// - domain: core records, fare policy and sample transit data

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
