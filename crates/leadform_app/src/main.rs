mod app;
mod effects;
mod logging;

fn main() {
    logging::initialize(logging::LogDestination::File);
    if let Err(err) = app::run() {
        eprintln!("leadform_app terminated: {err}");
    }
}
