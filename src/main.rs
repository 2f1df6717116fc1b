use clap::Parser;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = facesync::cli::Cli::parse();
    facesync::logging::init(cli.verbose);

    if let Err(err) = facesync::run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
