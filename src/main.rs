use std::process::ExitCode;

use sortvis::VisualizerConfig;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    match sortvis::term::run(&VisualizerConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "visualizer failed");
            ExitCode::FAILURE
        }
    }
}
