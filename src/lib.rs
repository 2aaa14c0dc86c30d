// Module layout (Clean Architecture style)
// - bootstrap: configuration and shared context
// - infrastructure: filesystem adapters
// - presentation: HTTP handlers, page injection and routing
// - application: ports, use cases, navigation and drum-scroll services
// - domain: core models

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
