use chrono::Local;
use clap::Parser;
use sampling_spreading::{
    format_summary, write_simulation_log, PlanError, PlanInputs, PlanOverrides,
    RollingCoupledSimulator, RunSummary,
};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "sampling-spreading")]
#[command(about = "Coupled rolling timeline: sampling creates ready hectares, spreading consumes them")]
struct Cli {
    /// TOML plan file; missing keys take the built-in defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Total area to cover (ha)
    #[arg(long)]
    total_area: Option<f64>,

    /// Total sampling points
    #[arg(long)]
    total_points: Option<u64>,

    /// Workdays per week (5, 6 or 7)
    #[arg(long)]
    workdays: Option<u8>,

    /// Days before spreading can start (0 = same day as sampling)
    #[arg(long)]
    lag_days: Option<usize>,

    /// Safety cap on simulated days
    #[arg(long)]
    max_days: Option<usize>,

    /// Start date, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    start_date: Option<String>,

    /// Where to write the daily table
    #[arg(long, default_value = "timeline.csv")]
    output: PathBuf,
}

impl Cli {
    fn plan_inputs(&self) -> Result<PlanInputs, PlanError> {
        let inputs = match &self.config {
            Some(path) => {
                info!("Loading plan from: {}", path.display());
                PlanInputs::from_toml_file(path)?
            }
            None => PlanInputs::default(),
        };

        let overrides = PlanOverrides {
            total_area_ha: self.total_area,
            total_points: self.total_points,
            workdays_per_week: self.workdays,
            lag_days: self.lag_days,
            max_sim_days: self.max_days,
            start_date: self.start_date.clone(),
        };
        overrides.apply(inputs)
    }
}

fn run(cli: &Cli) -> Result<(), PlanError> {
    let inputs = cli.plan_inputs()?;
    let config = inputs.to_simulation_config(Local::now().date_naive())?;
    let rates = inputs.derive_rates();

    let result = RollingCoupledSimulator::new(config).run();

    print!("{}", format_summary(&RunSummary::new(rates, &result)));
    write_simulation_log(&cli.output, &result.records)?;
    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sampling_spreading=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}
