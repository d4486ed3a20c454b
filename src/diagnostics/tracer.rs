/// Emits a debug event naming the calling function, if the stage's tracing
/// configuration covers the line currently being processed.
///
/// `$ts` must have a `tracing: TracingConfig` field and a `line()` method.
#[macro_export]
macro_rules! trace {
    ($ts:expr, $($arg:tt)+) => {
        if $ts.tracing.includes($ts.line() as usize) {
            log::debug!(
                "{} <- L{}: {}",
                stdext::function_name!(),
                $ts.line(),
                format_args!($($arg)+)
            )
        }
    };
}
