use crate::domain::model::{FilterUpdate, ServiceCategory, SortField, SortOrder};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "lawdesk")]
#[command(about = "Query the service catalog and classify contact subjects", long_about = None)]
pub struct CliConfig {
    /// Path to the catalog TOML file (the bundled catalog is used when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every service in catalog order
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show one service by id
    Show { id: String },

    /// Filter, search and sort the catalog
    Query(QueryArgs),

    /// Classify a contact subject by urgency and practice area
    Classify { subject: String },

    /// List the known service categories
    Categories,

    /// Validate the catalog file
    Check,
}

#[derive(Debug, Clone, clap::Args)]
pub struct QueryArgs {
    #[arg(long)]
    pub category: Option<ServiceCategory>,

    #[arg(short, long, default_value = "")]
    pub search: String,

    #[arg(long, value_enum, default_value_t = SortArg::Title)]
    pub sort_by: SortArg,

    #[arg(long, value_enum, default_value_t = OrderArg::Asc)]
    pub order: OrderArg,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl QueryArgs {
    pub fn filter_update(&self) -> FilterUpdate {
        FilterUpdate::new()
            .search(self.search.clone())
            .sort_by(self.sort_by.into())
            .sort_order(self.order.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Title,
    Id,
    /// Keep catalog order
    None,
}

impl From<SortArg> for Option<SortField> {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Title => Some(SortField::Title),
            SortArg::Id => Some(SortField::Id),
            SortArg::None => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Asc => SortOrder::Asc,
            OrderArg::Desc => SortOrder::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}
