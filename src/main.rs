use std::rc::Rc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_appender::rolling;

use hrm_attendance::api::HttpAttendanceApi;
use hrm_attendance::config::Config;
use hrm_attendance::console::ConsoleView;
use hrm_attendance::driver::StatusDriver;
use hrm_attendance::i18n::I18n;
use hrm_attendance::model::default_range;
use hrm_attendance::storage::FileLanguageStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Attendance widget starting...");

    let i18n = Rc::new(I18n::new(Box::new(FileLanguageStore::new(
        &config.lang_file,
    ))));
    let api = HttpAttendanceApi::new(
        reqwest::Client::new(),
        config.base_url.clone(),
        config.api_prefix.clone(),
    );
    let driver = Rc::new(StatusDriver::new(api, ConsoleView, Rc::clone(&i18n)));

    // Language switches re-render the widget through an explicit hook.
    let weak = Rc::downgrade(&driver);
    i18n.on_rerender(move |_| {
        if let Some(driver) = weak.upgrade() {
            driver.rerender();
        }
    });
    i18n.on_change(|lang| info!(lang = lang.code(), "language changed"));
    i18n.set_reload_hook(|| warn!("full reload requested"));

    i18n.apply_translations(i18n.active_language().code(), &ConsoleView);
    driver.load_status().await;

    let mut ticker = tokio::time::interval(Duration::from_millis(config.clock_tick_ms));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("commands: in | out | history [start end] | lang <code> | quit");

    loop {
        tokio::select! {
            _ = ticker.tick() => driver.tick(),
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let mut parts = line.split_whitespace();
                match parts.next() {
                    Some("in") => driver.check_in().await,
                    Some("out") => driver.check_out().await,
                    Some("history") => match (parts.next(), parts.next()) {
                        (Some(start), Some(end)) => driver.load_history(start, end).await,
                        _ => {
                            let (start, end) = default_range(chrono::Local::now().date_naive());
                            driver
                                .load_history(&start.to_string(), &end.to_string())
                                .await;
                        }
                    },
                    Some("lang") => {
                        let code = parts.next().unwrap_or("en");
                        i18n.apply_translations(code, &ConsoleView);
                    }
                    Some("quit") | Some("q") => break,
                    Some(other) => println!("unknown command: {other}"),
                    None => {}
                }
            }
        }
    }

    info!("Attendance widget stopped");
    Ok(())
}
