// Infrastructure layer (shared components)
pub mod infrastructure;

// Re-export infrastructure modules
pub use infrastructure::config;
pub use infrastructure::error;
pub use infrastructure::metrics;

// Domain layer
pub mod menu;
pub mod pipeline;
pub mod resolver;
pub mod template;

// Application layer
pub mod client;
pub mod console;
pub mod dispatch;

// Supporting modules
pub mod telemetry;
