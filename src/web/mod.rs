//! Web layer: page assembly and the HTTP server.

pub mod page;
pub mod server;

pub use page::render_page;
pub use server::{router, serve};
