// Pure simulation and sequencing logic, free of web-sys. Host-side tests
// under tests/ compile these files directly.

pub mod bubbles;
pub mod distortion;
pub mod fish;
pub mod game;
pub mod music;

pub use bubbles::BubbleField;
pub use distortion::{displace, BowlGeometry, RippleParams};
pub use fish::{active_palette, FishAgent, Population, TickContext, TickReport};
pub use game::{Ending, GameState, WinPolicy};
pub use music::{ScheduledStep, Sequencer, Waveform};
