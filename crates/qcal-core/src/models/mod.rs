mod bias_result;
mod manual_input;
mod measurement;
mod q_state;
mod score_result;
mod session_summary;

pub use bias_result::{BiasResult, Interpretation};
pub use manual_input::ManualInput;
pub use measurement::Measurement;
pub use q_state::QState;
pub use score_result::ScoreResult;
pub use session_summary::SessionSummary;
