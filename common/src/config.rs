#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Suppresses the banner printed before a session starts.
    pub no_banner: bool,
    /// Output reduction level.
    ///
    /// `0` prints headers and a summary, `1` prints only results, `2` prints only failures.
    pub quiet: u8,
    /// Stops a script at the first operation that fails.
    pub fail_fast: bool,
    /// Number of `-v` flags given on the command line.
    pub verbosity: u8,
}
