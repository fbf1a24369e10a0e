use clap::Parser;

fn main() {
    let cli = serviceaccess::cli::Cli::parse();

    if let Err(err) = serviceaccess::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
