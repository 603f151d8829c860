use clap::Parser;
use colored::Colorize;

use ipscope::cli::Cli;
use ipscope::config::{AppConfig, init_config};
use ipscope::runtime::run_server;
use ipscope::system::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        println!("{}", AppConfig::generate_sample_config());
        return Ok(());
    }

    // .env 中的 IPSCOPE__* 变量参与配置加载
    dotenvy::dotenv().ok();

    let config = match init_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            std::process::exit(1);
        }
    };

    // guard 必须存活到进程结束
    let _guard = match init_logging(&config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{} {:#}", "Failed to initialize logging:".red().bold(), e);
            std::process::exit(1);
        }
    };

    run_server(config).await
}
