use crate::ingest::FieldPolicy;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the transactions CSV file to serve
    #[arg(short, long)]
    pub data: PathBuf,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// How to treat unparseable numeric/date fields in the dataset
    #[arg(long, value_enum, default_value_t = FieldPolicy::Zero)]
    pub field_policy: FieldPolicy,
}
