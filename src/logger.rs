use log::info;

/// Plain message sink that records the milestones and failures of a fetch.
pub trait FetchLogger {
    fn log(&self, message: &str);
}

/// Forwards every message to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacade;

impl FetchLogger for LogFacade {
    fn log(&self, message: &str) {
        info!("{}", message);
    }
}
