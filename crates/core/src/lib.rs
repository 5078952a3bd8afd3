pub mod error;
pub mod power;
pub mod state;

pub use error::{BattError, Result};
pub use power::PowerSource;
pub use state::{classify, Category, DisplayOptions};
