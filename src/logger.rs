use std::io::Write;

/// Initializes the logger.
///
/// Records are written to stderr as `[time LEVEL file:line] message`.
/// `RUST_LOG` takes precedence over `level`.
pub fn init_logger(level: log::LevelFilter) {
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = buf.timestamp_seconds();

            writeln!(
                buf,
                "[{} {style}{}{style:#} {}:{}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
