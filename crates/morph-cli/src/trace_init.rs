use std::path::Path;

/// Keeps the background log writer alive; drop it last to flush.
#[must_use]
pub struct TraceGuard {
    #[cfg(feature = "trace")]
    _worker: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Install a JSON tracing subscriber, writing to `log_dir/morph-trace.jsonl`
/// when a directory is given and to stderr otherwise.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: Option<&Path>) -> TraceGuard {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("morph_core=debug,morph_cli=debug"));
    let builder = tracing_subscriber::fmt()
        .json()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(filter);

    match log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::never(dir, "morph-trace.jsonl");
            let (non_blocking, worker) = tracing_appender::non_blocking(file_appender);
            // Already-installed subscribers win; later calls are no-ops.
            let _ = builder.with_writer(non_blocking).try_init();
            TraceGuard {
                _worker: Some(worker),
            }
        }
        None => {
            let _ = builder.with_writer(std::io::stderr).try_init();
            TraceGuard { _worker: None }
        }
    }
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: Option<&Path>) -> TraceGuard {
    TraceGuard {}
}
