//! Pure index arithmetic shared by the collection engines.

pub mod capacity;
pub mod level;
