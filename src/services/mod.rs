pub mod ranking;
pub mod recommendation;

pub use ranking::{rank, rank_models};
pub use recommendation::{information_url, recommend, recommend_models, ScoreProjection};
