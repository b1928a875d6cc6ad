pub mod plot;

pub use plot::plot;
