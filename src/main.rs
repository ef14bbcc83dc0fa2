use gif_relay::web::app::App;
use gif_relay::web::state::AppState;
use gif_relay::AppConfig;
use std::env::args;
use std::process::exit;
use tracing::Level;

fn main() {
    let args: Vec<String> = args().collect();
    if args.len() < 2 {
        println!(
            "usage: {} CFG",
            args.first().unwrap_or(&"gif-relay".to_string())
        );
        exit(1);
    }

    let cfg: AppConfig = AppConfig::new_from_file_and_env(args[1].as_ref()).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        exit(1);
    });

    let _guard = cfg.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                environment: Some(cfg.env.clone().into()),
                ..Default::default()
            },
        ))
    });

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap_or_else(|e| {
            eprintln!("error starting runtime: {}", e);
            exit(1);
        })
        .block_on(async {
            // initialize tracing
            let subscriber = tracing_subscriber::fmt()
                .with_max_level(Level::DEBUG)
                .finish();
            let _ = tracing::subscriber::set_global_default(subscriber);

            tracing::debug!("config: {:?}", cfg);

            let state = AppState::from_config(cfg).unwrap_or_else(|e| {
                eprintln!("error: {:#}", e);
                exit(1);
            });

            if let Err(e) = App::new(state).serve().await {
                tracing::error!("server error: {:?}", e);
                exit(1);
            }
        });
}
