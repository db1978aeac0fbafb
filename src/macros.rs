/// Prints a timestamped status line, similar to `info!` in tracing.
/// Passing a starting `chrono::Local` instant as the first argument also
/// reports the elapsed time since that instant.
/// ```ignore
/// info_time!("decoded {} pages", n);
/// let started = chrono::Local::now();
/// info_time!(started, "scrape finished");
/// ```
#[macro_export]
macro_rules! info_time {
    ($strfm:literal $(,)? $($arg:expr),*) => {{
        println!(
            "{} : {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            format!($strfm, $($arg),*)
        );
    }};
    ($time:expr, $strfm:literal $(,)? $($arg:expr),*) => {{
        let elapsed = (chrono::Local::now() - $time).num_milliseconds() as f64 / 1000.0;
        println!(
            "{} : {} ({:.3} sec)",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            format!($strfm, $($arg),*),
            elapsed
        );
    }};
}
