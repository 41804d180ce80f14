pub mod args;
pub mod error;
pub mod model;
pub mod mvu;
pub mod controller {
    pub mod espn;
    pub mod live;
}
pub mod view {
    pub mod score;
}

pub use error::AppError;
