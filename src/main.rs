use log::info;

const DEFAULT_OUTPUT: &str = "output/mandelbrot.ppm";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let presenter = mandelbrot_explorer::PpmFilePresenter::new();
    let config = mandelbrot_explorer::MandelbrotConfig::default();
    let mut controller = mandelbrot_explorer::CliExportController::new(presenter, config);

    controller.generate()?;
    controller.write(&output)?;

    info!("done");

    Ok(())
}
