use std::env;
use vesh::config::Config;
use vesh::flags::Flags;
use vesh::shell::Shell;

fn main() -> Result<(), vesh::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("vesh {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = Config::from_flags(&flags);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter()))
        .init();

    let mut shell = Shell::new(config)?;
    if let Err(e) = shell.run() {
        eprintln!("{}", e);
        std::process::exit(libc::EXIT_FAILURE);
    }
    Ok(())
}
