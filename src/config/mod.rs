mod config;

pub use config::{
    LambdaForm, PaillierConfig,
    DEFAULT_MAX_RANDOMIZER_ATTEMPTS, MAX_CONFIG_BYTES,
};
