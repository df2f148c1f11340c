use clap::Parser;
use macime::Cli;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and succeed; usage errors exit 1
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    if let Err(e) = macime::logging::init() {
        eprintln!("{:#}", e);
    }

    std::process::exit(macime::run(cli));
}
