use std::path::PathBuf;

pub struct AppConfig {
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn new() -> Self {
        let storage = StorageConfig {
            data_file: std::env::var("DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data.json")),
        };
        Self { storage }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub struct StorageConfig {
    pub data_file: PathBuf,
}
