mod bc1_decode;
pub use bc1_decode::*;
