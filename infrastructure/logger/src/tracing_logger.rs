use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Chatbot -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Chatbot -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Chatbot -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Chatbot -- ", "{}", message);
    }
}
