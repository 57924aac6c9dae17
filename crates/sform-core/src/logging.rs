#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! With the `tracing` feature the macros below are the real `tracing` ones.
//! Without it they expand to nothing, so call sites in the layout crate stay
//! identical in both builds.
//!
//! The `tracing-json` feature adds [`init_json`], a one-call subscriber setup
//! for hosts that want newline-delimited JSON logs.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, trace, warn};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op debug_span macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }

    /// No-op trace macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op warn macro when tracing is disabled.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
}

/// Stand-in for a span when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Enter the span. Does nothing.
    pub fn enter(&self) -> NoopGuard {
        NoopGuard
    }
}

/// Guard returned by [`NoopSpan::enter`].
#[cfg(not(feature = "tracing"))]
pub struct NoopGuard;

/// Install a global JSON subscriber filtered by `filter`
/// (an `EnvFilter` directive such as `"sform_layout=debug"`).
///
/// `RUST_LOG` takes precedence when set. Returns an error if the directive
/// does not parse or a global subscriber is already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json(filter: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use tracing_subscriber::EnvFilter;

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::try_new(filter)?,
    };
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter)
        .with_current_span(true)
        .try_init()
}

#[cfg(all(test, not(feature = "tracing")))]
mod tests {
    #[test]
    fn noop_span_enters() {
        let span = crate::debug_span!("resize", width = 10);
        let _guard = span.enter();
        crate::debug!("ignored {}", 1);
        crate::trace!(x = 1, "ignored");
        crate::warn!("ignored");
    }
}

#[cfg(all(test, feature = "tracing-json"))]
mod json_tests {
    use super::init_json;

    // One test: the global subscriber can only be installed once per process.
    #[test]
    fn init_json_rejects_bad_directive_and_second_install() {
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(init_json("sform_layout=[[[").is_err());
        }
        assert!(init_json("sform_layout=debug").is_ok());
        assert!(init_json("sform_layout=debug").is_err());
    }
}
