use clap::Parser;
use seqtab::cli;
use seqtab::commands;
use seqtab::config::Config;
use std::io;

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|io_err| io_err.kind() == io::ErrorKind::BrokenPipe)
    })
}

fn main() {
    let env = env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn");
    env_logger::Builder::from_env(env).init();

    let args = cli::Args::parse_from(cli::normalize_legacy_flags(std::env::args_os()));
    let config = Config::load();

    let result = match args.command {
        cli::Commands::Fasta2tab(args) => commands::fasta2tab::run(args, &config),
        cli::Commands::Tab2fasta(args) => commands::tab2fasta::run(args, &config),
    };

    if let Err(e) = result {
        if is_broken_pipe(&e) {
            std::process::exit(0);
        }
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
