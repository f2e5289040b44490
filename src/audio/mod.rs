pub mod error;
pub mod playback;
pub mod preview;
pub mod util;
