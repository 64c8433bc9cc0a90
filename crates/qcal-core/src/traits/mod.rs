mod bias_engine;
mod score_engine;

pub use bias_engine::IBiasEngine;
pub use score_engine::IScoreEngine;
