//! Configuration loading and file formats

pub mod file_config;
pub mod loader;

pub use file_config::{
    FileBlackboxConfig, FileConfig, FileGeminiConfig, FileOpenAiConfig, FileOutputConfig,
    FileProvidersConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
