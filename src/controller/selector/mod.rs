pub mod http_handlers;
pub mod session;

pub use http_handlers::*;
pub use session::*;
