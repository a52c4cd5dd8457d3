pub mod chart;
pub mod zodiac;

pub use chart::*;
pub use zodiac::*;
