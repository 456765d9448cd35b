pub mod http;

pub use http::run_http_server;
