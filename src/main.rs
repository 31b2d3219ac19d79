use anyhow::Result;

use todolist::api;
use todolist::config::Config;
use todolist::constants::DEFAULT_LISTEN_ADDR;
use todolist::menu::Menu;
use todolist::service::TodoService;
use todolist::storage::Storage;

#[tokio::main]
async fn main() -> Result<()> {
    setup_logger()?;

    let config = Config::from_env()?;
    let storage = Storage::connect(&config.database_url).await?;
    let service = TodoService::new(storage.conn, config);

    let mode = std::env::args().nth(1);
    match mode.as_deref() {
        None | Some("menu") => Menu::new(service).run().await?,
        Some("serve") => {
            let addr = std::env::var("TODOLIST_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
            api::serve(service, &addr).await?;
        }
        Some("close-overdue") => {
            let closed = service.close_overdue_tasks().await?;
            println!("✅ Closed {closed} overdue tasks.");
        }
        Some(other) => {
            eprintln!("Unknown mode '{other}'");
            eprintln!("Usage: todolist [menu|serve|close-overdue]");
            std::process::exit(2);
        }
    }

    Ok(())
}

fn setup_logger() -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
