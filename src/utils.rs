use crate::constants::DEFAULT_API_BASE_URL;

/// Get backend API base URL from environment variable or use default
pub fn get_api_base_url() -> String {
    std::env::var("OPTIONPULSE_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
}
