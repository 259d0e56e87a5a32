//! Integration tests with mock HTTP server

pub mod completion;
pub mod facade;
pub mod mock_server;
