//! Console logging: `tracing-subscriber` fmt output routed to the browser
//! console through `tracing-web`.

use tracing::Level;
use tracing_web::MakeWebConsoleWriter;

/// Install the console subscriber. wasm32 has no system clock, so events
/// carry no timestamp.
pub fn init(level: Level) {
    tracing_subscriber::fmt()
        .with_writer(MakeWebConsoleWriter::new())
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .init();
}
