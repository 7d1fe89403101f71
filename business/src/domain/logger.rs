/// Logging port for the chat use cases.
///
/// Keeps the business crate free of any logging backend; the tracing-based
/// adapter lives in the infrastructure layer.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
