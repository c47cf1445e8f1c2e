use clap::Parser;
use lawdesk::config::cli::{Command, OutputFormat, QueryArgs};
use lawdesk::utils::logger::{self, LogFormat};
use lawdesk::utils::validation::Validate;
use lawdesk::{CatalogConfig, CliConfig, ContactMessage, QueryEngine, Result, ServiceEntry};
use std::io::Write;
use std::sync::Arc;

fn main() {
    let cli = CliConfig::parse();

    logger::init_logger(LogFormat::from_json_flag(cli.json_logs), cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli) {
        tracing::error!(
            "❌ lawdesk failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: CliConfig) -> Result<()> {
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading catalog from: {}", path.display());
            CatalogConfig::from_file(path)?
        }
        None => CatalogConfig::builtin()?,
    };
    config.validate()?;

    let mut engine = QueryEngine::new(Arc::new(config.catalog()));

    match cli.command {
        Command::List { format } => print_services(engine.services(), format)?,
        Command::Show { id } => match engine.service_by_id(&id) {
            Some(service) => println!("{}", serde_json::to_string_pretty(service)?),
            None => println!("No service with id '{}'", id),
        },
        Command::Query(args) => {
            apply_query(&mut engine, &args);
            print_services(engine.filtered(), args.format)?;
        }
        Command::Classify { subject } => {
            let message = ContactMessage::with_subject(subject);
            let classification = config.classifier().classify(&message);
            println!("urgency_level: {}", classification.urgency_level);
            println!("practice_area: {}", classification.practice_area);
        }
        Command::Categories => {
            for category in engine.categories() {
                let count = engine.services_by_category(*category).len();
                println!("{:<12} {}", category.as_str(), count);
            }
        }
        Command::Check => {
            println!(
                "✅ Catalog '{}' is valid ({} services)",
                config.catalog.name,
                engine.services().len()
            );
        }
    }

    Ok(())
}

fn apply_query(engine: &mut QueryEngine, args: &QueryArgs) {
    engine.set_filter(args.filter_update());
    // pinning keeps the active category and the filter in step
    engine.set_active_category(args.category);
}

fn print_services(services: &[ServiceEntry], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            for service in services {
                println!("{:<16} {:<12} {}", service.id, service.category.as_str(), service.title);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(services)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer.write_record(["id", "title", "category", "description", "features"])?;
            for service in services {
                let features = service.features.join("; ");
                writer.write_record([
                    service.id.as_str(),
                    service.title.as_str(),
                    service.category.as_str(),
                    service.description.as_str(),
                    features.as_str(),
                ])?;
            }
            writer.flush()?;
        }
    }
    std::io::stdout().flush()?;
    Ok(())
}
