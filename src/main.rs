use clap::Parser;
use cupid_clean::app::{handle_fatal_error, init_logging, AppConfig};
use cupid_clean::clean::CleanCommand;
use cupid_clean::cli::Cli;
use cupid_clean::config::ControlDict;

fn main() {
    let cli = Cli::parse();
    let command = CleanCommand::new(cli.config_path);

    // The config may carry the log level, so it is read before logging starts;
    // a load failure is only reported once the logger is up.
    let control = command.load();
    let config = AppConfig::new(&command.config_path)
        .with_log_level(control.as_ref().ok().and_then(ControlDict::log_level));
    let _logging = init_logging(&config);

    if let Err(e) = control.and_then(|control| command.execute(&control)) {
        handle_fatal_error(e.into(), config.is_verbose());
    }
}
