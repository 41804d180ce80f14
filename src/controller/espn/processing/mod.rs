pub mod data_processor;
pub mod hot_streak;
pub mod round_processor;
pub mod row_mapper;
pub mod score_calculator;

pub use data_processor::*;
pub use hot_streak::*;
pub use round_processor::*;
pub use row_mapper::*;
pub use score_calculator::*;
