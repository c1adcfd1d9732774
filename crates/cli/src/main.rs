use clap::{Parser, Subcommand};
use std::fmt::Write as _;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_shared::FindMatchesRes;
use verve_core::{
    get_life_stage_tip, resolve_knowledge_table_path, CoreConfig, KnowledgeStore, LifeStage,
    VerveError,
};
use verve_flavour::{
    emoji_for_nutrient, nutrient_fact, self_care_reminder, welcome, DISCLAIMER,
    EMPTY_SELECTION_MESSAGE, NO_DEFICIENCY_MESSAGE,
};

#[derive(Parser)]
#[command(name = "verve")]
#[command(about = "Check your nutritional wellness with verve")]
struct Cli {
    /// Knowledge table CSV (defaults to VERVE_KNOWLEDGE_TABLE, then the bundled table)
    #[arg(long, global = true)]
    table: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every known symptom
    Symptoms,
    /// Reveal nutrients linked to the given symptoms
    Check(CheckArgs),
    /// List life stages
    Stages,
    /// Show the wellness tip for a life stage
    Tip {
        /// Life stage, e.g. "Reproductive Age"
        stage: String,
    },
}

#[derive(clap::Args)]
struct CheckArgs {
    /// Symptoms to check, exactly as listed by `verve symptoms`
    symptoms: Vec<String>,
    /// Your life stage, for a tailored tip (shown together with --name)
    #[arg(long)]
    stage: Option<String>,
    /// Your name
    #[arg(long)]
    name: Option<String>,
    /// Seed for the facts and reminder shown (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Print matches as JSON instead of a report
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("verve_core=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Symptoms) => {
            let store = load_store(cli.table)?;
            for symptom in store.list_symptom_vocabulary() {
                println!("{symptom}");
            }
        }
        Some(Commands::Check(args)) => {
            let store = load_store(cli.table)?;
            if args.json {
                let matches = store.find_matches(args.symptoms.as_slice())?;
                println!(
                    "{}",
                    serde_json::to_string_pretty(&FindMatchesRes::from_records(&matches))?
                );
            } else {
                let seed = args.seed.unwrap_or_else(seed_from_clock);
                print!("{}", render_check(&store, &args, seed)?);
            }
        }
        Some(Commands::Stages) => {
            for stage in LifeStage::ALL {
                println!("{stage}");
            }
        }
        Some(Commands::Tip { stage }) => {
            println!("{}", get_life_stage_tip(&stage)?);
        }
        None => {
            println!("Use 'verve --help' for commands");
        }
    }

    Ok(())
}

fn load_store(table: Option<PathBuf>) -> anyhow::Result<KnowledgeStore> {
    let override_path = table.or_else(|| {
        std::env::var("VERVE_KNOWLEDGE_TABLE")
            .ok()
            .map(PathBuf::from)
    });
    let cfg = CoreConfig::new(resolve_knowledge_table_path(override_path)?)?;
    Ok(KnowledgeStore::from_config(&cfg)?)
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Render the full insights report for `verve check`.
///
/// An empty symptom list prints a prompt instead of insights; the remaining sections still
/// render. An unrecognised `--stage` is an error.
fn render_check(store: &KnowledgeStore, args: &CheckArgs, seed: u64) -> anyhow::Result<String> {
    let stage = args
        .stage
        .as_deref()
        .map(str::parse::<LifeStage>)
        .transpose()?;
    let name = args.name.as_deref().map(str::trim).filter(|n| !n.is_empty());

    let mut out = String::new();

    if let Some(name) = name {
        writeln!(out, "{}\n", welcome(name))?;
    }

    match store.find_matches(args.symptoms.as_slice()) {
        Ok(matches) => {
            writeln!(out, "🌸 Your Personalized Nutritional Insights:\n")?;
            if matches.is_empty() {
                writeln!(out, "{NO_DEFICIENCY_MESSAGE}\n")?;
            }
            for (index, record) in matches.iter().enumerate() {
                let nutrient = record.nutrient().as_str();
                writeln!(out, "{} {}", emoji_for_nutrient(nutrient), nutrient)?;
                writeln!(out, "  Signs: {}", record.raw_symptoms())?;
                writeln!(out, "  Nourishment Tips: {}", record.remedy())?;
                writeln!(
                    out,
                    "  {}\n",
                    nutrient_fact(nutrient, seed.wrapping_add(index as u64))
                )?;
            }
        }
        Err(VerveError::InsufficientInput) => {
            writeln!(out, "{EMPTY_SELECTION_MESSAGE}\n")?;
        }
        Err(e) => return Err(e.into()),
    }

    if let (Some(name), Some(stage)) = (name, stage) {
        writeln!(out, "💖 Tailored Wellness Tips for {name}")?;
        writeln!(out, "{}\n", stage.tip())?;
    }

    writeln!(out, "🌺 Your Daily Self-Care Reminder")?;
    writeln!(out, "{}\n", self_care_reminder(seed))?;
    writeln!(out, "{DISCLAIMER}")?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    const TABLE: &str = "Vitamin,Symptoms,Solutions
Vitamin D,\"fatigue, bone pain\",sunlight exposure
Zinc,\"hair loss, loss of taste\",shellfish
Selenium,thyroid problems,brazil nuts
";

    fn store() -> KnowledgeStore {
        KnowledgeStore::load_from_reader(TABLE.as_bytes()).expect("load table")
    }

    fn check_args(argv: &[&str]) -> CheckArgs {
        let cli = Cli::try_parse_from(argv).expect("parse args");
        match cli.command {
            Some(Commands::Check(args)) => args,
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_table_after_subcommand() {
        let cli = Cli::try_parse_from(["verve", "symptoms", "--table", "/tmp/t.csv"])
            .expect("parse args");
        assert_eq!(cli.table, Some(PathBuf::from("/tmp/t.csv")));
    }

    #[test]
    fn report_lists_matches_with_emoji_and_remedy() {
        let args = check_args(&["verve", "check", "hair", "--seed", "7"]);
        let out = render_check(&store(), &args, 7).expect("render");

        assert!(out.contains("🦪 Zinc"));
        assert!(out.contains("  Signs: hair loss, loss of taste"));
        assert!(out.contains("  Nourishment Tips: shellfish"));
        assert!(out.contains(&nutrient_fact("Zinc", 7)));
        assert!(!out.contains("Vitamin D"));
        assert!(out.ends_with(&format!("{DISCLAIMER}\n")));
    }

    #[test]
    fn unknown_nutrient_gets_default_emoji() {
        let args = check_args(&["verve", "check", "thyroid"]);
        let out = render_check(&store(), &args, 1).expect("render");
        assert!(out.contains("💊 Selenium"));
    }

    #[test]
    fn report_is_deterministic_for_a_seed() {
        let args = check_args(&["verve", "check", "fatigue", "hair loss"]);
        let first = render_check(&store(), &args, 99).expect("render");
        let second = render_check(&store(), &args, 99).expect("render");
        assert_eq!(first, second);
    }

    #[test]
    fn no_match_shows_reassurance() {
        let args = check_args(&["verve", "check", "headache"]);
        let out = render_check(&store(), &args, 3).expect("render");
        assert!(out.contains(NO_DEFICIENCY_MESSAGE));
    }

    #[test]
    fn empty_selection_shows_prompt() {
        let args = check_args(&["verve", "check"]);
        let out = render_check(&store(), &args, 3).expect("render");
        assert!(out.contains(EMPTY_SELECTION_MESSAGE));
        assert!(!out.contains("Personalized Nutritional Insights"));
        assert!(out.contains(self_care_reminder(3)));
    }

    #[test]
    fn stage_tip_needs_a_name() {
        let args = check_args(&["verve", "check", "fatigue", "--stage", "Pregnancy"]);
        let out = render_check(&store(), &args, 0).expect("render");
        assert!(!out.contains(LifeStage::Pregnancy.tip()));

        let args = check_args(&[
            "verve",
            "check",
            "fatigue",
            "--stage",
            "Pregnancy",
            "--name",
            "Amara",
        ]);
        let out = render_check(&store(), &args, 0).expect("render");
        assert!(out.starts_with(&welcome("Amara")));
        assert!(out.contains("💖 Tailored Wellness Tips for Amara"));
        assert!(out.contains(LifeStage::Pregnancy.tip()));
    }

    #[test]
    fn unknown_stage_is_an_error() {
        let args = check_args(&["verve", "check", "fatigue", "--stage", "Unknown"]);
        let err = render_check(&store(), &args, 0).expect_err("unknown stage");
        assert!(matches!(
            err.downcast_ref::<VerveError>(),
            Some(VerveError::UnknownLifeStage(_))
        ));
    }
}
