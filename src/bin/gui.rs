fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let command = mandelbrot_explorer::RunGuiCommand::new(
        mandelbrot_explorer::MandelbrotConfig::default(),
    );

    command.execute()
}
