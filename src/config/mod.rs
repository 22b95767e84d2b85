mod app_config;

pub use app_config::{
    AppConfig, CacheSettings, CorsConfig, InMemorySettings, LogFormat, LoggingConfig,
    MetricsConfig, RedisSettings, ServerConfig, TlsCertReqs,
};
