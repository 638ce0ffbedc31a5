pub mod config;

pub use config::{
    AppConfig, AssetPaths, BankConfig, CoinConfig, ConfigLoadReport, WindowConfig,
};
