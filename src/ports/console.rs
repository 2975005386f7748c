//! Console port for line-oriented user interaction.

/// Error type returned by port methods.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;

/// Reads answers from and writes lines to the user.
pub trait Console: Send + Sync {
    /// Shows `message` and reads one line of input, without the trailing
    /// newline.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input cannot be read.
    fn prompt(&self, message: &str) -> Result<Option<String>, PortError>;

    /// Writes one line of output.
    fn say(&self, line: &str);
}

impl<T: Console + ?Sized> Console for std::sync::Arc<T> {
    fn prompt(&self, message: &str) -> Result<Option<String>, PortError> {
        (**self).prompt(message)
    }

    fn say(&self, line: &str) {
        (**self).say(line);
    }
}
