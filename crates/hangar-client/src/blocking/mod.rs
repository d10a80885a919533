mod client;

pub use client::{get_client, ApiClient};
