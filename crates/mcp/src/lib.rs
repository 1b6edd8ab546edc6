// MCP (Model Context Protocol) server for the Infomaniak API
// Exposes every catalog operation as a tool to agent clients

pub mod dispatcher;
pub mod protocol;
pub mod server;
pub mod stdio;
pub mod tools;

pub use dispatcher::Dispatcher;
pub use server::{McpServer, McpSession};
