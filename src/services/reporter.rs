// `display` only reaches the console; `info` and `error` only reach the log.
pub trait Reporter {
    fn display(&self, message: &str);
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn display(&self, message: &str) {
        println!("{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}
