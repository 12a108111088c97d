use super::ShotArgs;
use crate::reports;
use clap::Args;
use discforge::config::Config;
use discforge::disc::{DiscCatalog, DiscId};
use discforge::error::{DfResult, DiscForgeError};
use discforge::scorer::Scorer;
use discforge::trajectory;

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    #[command(flatten)]
    pub config: Config,

    #[command(flatten)]
    pub shot: ShotArgs,

    /// Catalog id of the disc to draw.
    #[arg(long)]
    pub disc: String,

    /// Number of path samples. Defaults to `--default-samples`.
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Rows to show in the table.
    #[arg(long, default_value_t = 10)]
    pub rows: usize,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: PathArgs, catalog: &DiscCatalog, scorer: &Scorer) -> DfResult<()> {
    let ctx = args.shot.build()?;
    let disc = catalog
        .get(&DiscId::new(args.disc.as_str()))
        .ok_or_else(|| DiscForgeError::UnknownDisc(args.disc.clone()))?;
    let samples = args.samples.unwrap_or(scorer.flight.default_samples);

    if let Some(overlay) = trajectory::generate_overlay(scorer, &disc, &ctx, samples)? {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&overlay)?);
        } else {
            reports::print_shot_header(&ctx);
            reports::print_path(&disc, &overlay.path, args.rows);
            reports::print_overlay(&overlay);
        }
        return Ok(());
    }

    let path = scorer.trajectory(&disc, &ctx, samples)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&path)?);
    } else {
        reports::print_shot_header(&ctx);
        reports::print_path(&disc, &path, args.rows);
    }
    Ok(())
}
