//! IO utilities for loading external datasets.

pub mod balance_scale;

pub use balance_scale::{
    generate_balance_scale, read_balance_scale, read_balance_scale_with_config, read_raw,
    BalanceScaleData, BalanceScaleReaderConfig,
};
