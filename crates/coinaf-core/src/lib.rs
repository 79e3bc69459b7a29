pub mod analytics;
pub mod config;
pub mod store;
pub mod types;

pub use config::{load_app_config, load_app_config_from_env, AppConfig, ConfigError};
pub use store::{read_csv, write_csv, StoreError};
pub use types::{Category, ProductRecord, ResultSet, UnknownCategory, CSV_COLUMNS, LOCATION_UNKNOWN};
