use worktally::commands::Cli;
use worktally::libs::logging;
use worktally::msg_error;

fn main() {
    logging::init();

    if let Err(error) = Cli::menu() {
        msg_error!(format!("{:#}", error));
        std::process::exit(1);
    }
}
