pub mod algorithm;
pub mod colour_map;
pub mod mandelbrot_config;
