//! Structured log helpers.
//!
//! Every benchmark event carries a `scheme` field so log lines can be
//! grouped per algorithm.

/// Log an event tagged with the scheme it concerns.
///
/// ```rust,ignore
/// log_event!(info, SchemeId::MlDsa44, "Validation passed", sign_time_us = 120);
/// ```
#[macro_export]
macro_rules! log_event {
    (info, $scheme:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            scheme = %$scheme,
            $($($field)*,)?
            $msg
        )
    };

    (warn, $scheme:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::warn!(
            scheme = %$scheme,
            $($($field)*,)?
            $msg
        )
    };

    (error, $scheme:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::error!(
            scheme = %$scheme,
            $($($field)*,)?
            $msg
        )
    };

    (debug, $scheme:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::debug!(
            scheme = %$scheme,
            $($($field)*,)?
            $msg
        )
    };
}

/// Open an info-level span for one stage of the run.
///
/// ```rust,ignore
/// let _guard = bench_span!("benchmark", scheme = %id).entered();
/// ```
#[macro_export]
macro_rules! bench_span {
    ($name:expr) => {
        tracing::info_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}

#[cfg(test)]
mod tests {
    /// Test: the macros expand against a plain Display value without a
    /// subscriber installed
    #[test]
    fn test_macros_expand() {
        let scheme = "ML-DSA-44";
        crate::log_event!(info, scheme, "Event", trial = 3);
        crate::log_event!(debug, scheme, "Event");
        let span = crate::bench_span!("validation", scheme = %scheme);
        let _guard = span.enter();
    }
}
