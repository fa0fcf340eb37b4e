mod decode_error;
mod state;
mod swap;

pub use decode_error::DecodeError;
pub use state::State;
pub use swap::{Swap, SwapType, TokenAccountInfo};
