use crate::models::DispatchStrategy;
use crate::services::config_service;

#[tauri::command]
pub fn get_config() -> Result<config_service::Config, String> {
    config_service::load_config()
}

#[tauri::command]
pub fn set_endpoint(url: String) -> Result<config_service::Config, String> {
    config_service::set_endpoint(&url)
}

#[tauri::command]
pub fn set_dispatch_strategy(strategy: DispatchStrategy) -> Result<config_service::Config, String> {
    config_service::set_dispatch_strategy(strategy)
}
