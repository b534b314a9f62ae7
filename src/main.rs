use clap::Parser;
use stickies::cli::{
    handle_add, handle_delete, handle_edit, handle_list, handle_serve, handle_show, Cli, Commands,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();

    init_tracing(match cli.command {
        Commands::Serve { .. } => "stickies=info",
        _ => "stickies=warn",
    });

    let file = cli.file;
    let result = match cli.command {
        Commands::List { json } => handle_list(file, json),
        Commands::Show { index, json } => handle_show(file, index, json),
        Commands::Add {
            title,
            body,
            stdin,
            json,
        } => handle_add(file, title, body, stdin, json),
        Commands::Edit {
            index,
            title,
            body,
            stdin,
            json,
        } => handle_edit(file, index, title, body, stdin, json),
        Commands::Delete { index, force } => handle_delete(file, index, force),
        Commands::Serve {
            host,
            port,
            title,
            columns,
            preview_chars,
        } => handle_serve(file, host, port, title, columns, preview_chars),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
