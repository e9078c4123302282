/// Network adapters for the radar server
mod push_channel_client;
mod search_client;
mod server_url;

pub use push_channel_client::HttpPushChannel;
pub use search_client::HttpDeveloperSearch;
pub use server_url::parse_server_url;
