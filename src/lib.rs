pub mod activation;
pub mod config;
pub mod data;
pub mod error;
pub mod normalize;
pub mod stats;
pub mod vector;

pub use activation::{derivative_sigmoid, sigmoid, Sigmoid};
pub use config::{Config, DegeneratePolicy, LoaderConfig, NormalizeConfig};
pub use data::{load_csv, parse_csv, read_csv, to_numeric, Record};
pub use error::{Result, UtilErr};
pub use normalize::{normalize_by_feature_scaling, ColumnRange, Normalizer};
pub use stats::{max, min};
pub use vector::dot_product;
