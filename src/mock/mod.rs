//! Mock Collaborators
//!
//! 乱数・疑似レイテンシ・時刻の差し替え可能な実装を提供

pub mod clock;
pub mod latency;
pub mod random;

pub use clock::{Clock, FixedClock, SystemClock};
pub use latency::{FixedDelay, Latency, NoDelay};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
