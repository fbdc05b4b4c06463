pub mod config_service;
pub mod dispatch;
pub mod logging;
pub mod panel;
pub mod pipeline;
pub mod renderer;
pub mod selection_service;
pub mod selection_store;
pub mod sentiment_client;
pub mod surfaces;
