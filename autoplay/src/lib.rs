mod playout;
mod recording;
pub use playout::*;
pub use recording::*;
