use crate::reports;
use clap::Args;
use discforge::disc::{DiscCatalog, DiscType};

#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// Only list one type (putter, midrange, fairway_driver, distance_driver).
    #[arg(short = 't', long = "type")]
    pub disc_type: Option<DiscType>,

    /// Only list discs that suit a beginner's arm.
    #[arg(long, default_value_t = false)]
    pub beginner: bool,
}

pub fn run(args: &CatalogArgs, catalog: &DiscCatalog) {
    let mut discs = match args.disc_type {
        Some(t) => catalog.of_type(t),
        None => catalog.iter().cloned().collect(),
    };
    if args.beginner {
        discs.retain(|d| d.is_beginner_friendly());
    }
    println!("\n📀 {} of {} discs", discs.len(), catalog.len());
    reports::print_catalog(&discs);
}
