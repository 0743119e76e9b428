pub mod round_flow;
pub mod round_state;

pub use round_flow::{RoundFlow, RoundOutcome, TimerAction, TimerRequest, Transition};
pub use round_state::{Phase, RevealPolarity, RoundState};
