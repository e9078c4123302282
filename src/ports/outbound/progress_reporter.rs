/// ProgressReporter port for user feedback on stderr
///
/// Keeps status messages separate from rendered output on stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Starts an indeterminate activity (e.g. a request in flight)
    ///
    /// The activity ends on the next `report_error` or `report_completion`.
    fn report_activity(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
