use super::ShotArgs;
use crate::reports;
use clap::Args;
use discforge::api::{self, RecommendationRequest};
use discforge::config::Config;
use discforge::disc::DiscCatalog;
use discforge::error::DfResult;
use discforge::scorer::Scorer;
use discforge::selector::{Mode, Outcome, Strategy};

#[derive(Args, Debug, Clone)]
pub struct RecommendArgs {
    #[command(flatten)]
    pub config: Config,

    #[command(flatten)]
    pub shot: ShotArgs,

    /// Disc ids in the bag, comma separated. Defaults to the whole catalog.
    #[arg(short, long, value_delimiter = ',')]
    pub bag: Option<Vec<String>>,

    #[arg(long, default_value = "me")]
    pub owner: String,

    #[arg(short, long, default_value = "simple")]
    pub mode: Mode,

    /// Highlight one slot of a multi recommendation.
    #[arg(short, long)]
    pub strategy: Option<Strategy>,

    /// Path samples for the top disc. Defaults to `--default-samples`.
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Print the response as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(
    args: RecommendArgs,
    catalog: &DiscCatalog,
    scorer: &Scorer,
    debug: bool,
) -> DfResult<()> {
    let disc_ids = match &args.bag {
        Some(ids) => ids
            .iter()
            .filter(|id| !id.trim().is_empty())
            .cloned()
            .collect(),
        None => catalog.iter().map(|d| d.id().to_string()).collect(),
    };
    let req = RecommendationRequest {
        owner: args.owner.clone(),
        disc_ids,
        distance: args.shot.distance,
        wind_speed: args.shot.wind_speed,
        wind_direction: args.shot.wind_dir.clone(),
        unit: args.shot.unit,
        skill: args.shot.skill,
        mode: args.mode,
        hole_layout: args.shot.layout()?,
        samples: args.samples,
    };
    let response = api::handle_recommendation(scorer, catalog, &req)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let ctx = args.shot.build()?;
    reports::print_shot_header(&ctx);

    let recommendation = match &response.outcome {
        Outcome::Recommended { recommendation, .. } => recommendation,
        Outcome::EmptyBag => {
            println!("\n🎒 The bag is empty. Add some discs first.");
            return Ok(());
        }
        Outcome::NoEligibleDiscs => {
            println!(
                "\n🚫 No disc in the bag suits a {} thrower. Try slower discs.",
                ctx.skill()
            );
            return Ok(());
        }
    };

    reports::print_ranking(response.outcome.ranking(), &ctx);
    reports::print_recommendation(recommendation);

    if let Some(strategy) = args.strategy {
        let pick = recommendation.for_strategy(strategy);
        println!(
            "\n🎯 {} pick: {} (score {:.1})",
            strategy, pick.disc, pick.score
        );
    }

    let best = recommendation.best();
    if debug {
        let details = scorer.score_debug(&best.disc, &ctx);
        reports::print_score_breakdown(best.disc.name(), &details, &scorer.weights);
    }

    match (&response.overlay, &response.path) {
        (Some(overlay), _) => {
            reports::print_path(&best.disc, &overlay.path, 10);
            reports::print_overlay(overlay);
        }
        (None, Some(path)) => reports::print_path(&best.disc, path, 10),
        (None, None) => {}
    }
    Ok(())
}
