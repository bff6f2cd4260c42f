mod settings;

pub use settings::{ClientConfig, LoggingConfig, MenuConfig, Settings, TemplateConfig};
