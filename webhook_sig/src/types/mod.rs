pub mod parsed_url;

pub use parsed_url::ParsedUrl;
