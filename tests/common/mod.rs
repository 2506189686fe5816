#![allow(dead_code)]

use sizewise::SizeConverter;

/// Installs a log subscriber once per test binary; `RUST_LOG` picks the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_test_writer()
        .try_init();
}

pub fn converter() -> &'static SizeConverter {
    init_tracing();
    SizeConverter::global()
}
