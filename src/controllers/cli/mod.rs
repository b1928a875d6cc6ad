mod export;

pub use export::CliExportController;
