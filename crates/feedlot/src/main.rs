use clap::Parser;
use feedlot::cli::Cli;
use feedlot::{AppConfig, AppState, NativeStorage, commands, init_logging};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(NativeStorage::default_path);

    init_logging(&data_dir, &cli.log_level)?;

    let config = AppConfig::load_or_create(&data_dir)?;
    let mut storage = NativeStorage::new(data_dir);
    let mut state = AppState::restore(&storage);

    let output = commands::execute(cli.command, &mut state, &mut storage, &config)?;
    print!("{output}");

    tracing::info!("Command finished");
    Ok(())
}
