use clap::Parser;
use tutor_funnel::core::pricing;
use tutor_funnel::domain::model::{Package, Remote};
use tutor_funnel::domain::ports::ConfigProvider;
use tutor_funnel::utils::{logger, validation::Validate};
use tutor_funnel::{CliConfig, Funnel, TomlConfig, WpCatalog, WpOrderGateway};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting tutor-funnel catalog preview");

    match &cli.config {
        Some(path) => {
            let config = match TomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("Failed to load config file {}: {}", path, e);
                    eprintln!("Failed to load config file: {}", e);
                    std::process::exit(1);
                }
            };
            preview(config).await
        }
        None => preview(cli).await,
    }
}

async fn preview<C>(config: C) -> anyhow::Result<()>
where
    C: ConfigProvider + Validate + Clone,
{
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    }

    let catalog = WpCatalog::new(config.clone());
    let gateway = WpOrderGateway::new(config);
    let mut funnel = Funnel::new(catalog, gateway);

    funnel.load_subjects().await;
    match funnel.subjects() {
        Remote::Ready(subjects) => {
            println!("Available subjects ({}):", subjects.len());
            for subject in subjects {
                println!("  [{}] {}", subject.id, subject.title);
            }
        }
        Remote::Failed(reason) => {
            eprintln!("Could not load subjects: {}", reason);
            std::process::exit(2);
        }
        Remote::Loading => unreachable!("load_subjects always settles the state"),
    }

    println!("\nPackages:");
    for package in Package::standard_catalog() {
        let q = pricing::quote(Some(&package));
        let discount_note = if q.discount > 0 {
            format!(" (save ${}, {}% off)", q.discount, q.discount_percent)
        } else {
            String::new()
        };
        println!(
            "  {} - {} sessions, ${}/session, ${} + ${} tax = ${}{}",
            package.name, package.sessions, q.per_session, package.price, q.tax, q.total,
            discount_note
        );
    }

    Ok(())
}
