use anyhow::{bail, Context, Result};
use clap::Parser;
use planner_client::{
    load_settings, render_itinerary, FormController, Notification, Notifier, Phase, PlannerView,
    TracingNotifier,
};
use shared::domain::TripField;
use tracing_subscriber::EnvFilter;

/// Plans a trip from the command line through the same controller the
/// desktop form uses.
#[derive(Parser, Debug)]
struct Cli {
    #[arg(long)]
    age: Option<String>,
    #[arg(long)]
    gender: Option<String>,
    /// e.g. "adventurous, loves nature, enjoys local cuisine"
    #[arg(long)]
    personality: Option<String>,
    #[arg(long)]
    days: Option<String>,
    #[arg(long)]
    origin: Option<String>,
    #[arg(long)]
    destination: Option<String>,
    #[arg(long)]
    planner_url: Option<String>,
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// Print the itinerary as JSON instead of the text breakdown.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn fields(&self) -> [(TripField, Option<&String>); 6] {
        [
            (TripField::Age, self.age.as_ref()),
            (TripField::Gender, self.gender.as_ref()),
            (TripField::Personality, self.personality.as_ref()),
            (TripField::Days, self.days.as_ref()),
            (TripField::Origin, self.origin.as_ref()),
            (TripField::Destination, self.destination.as_ref()),
        ]
    }
}

/// Logs each notification and echoes it on stderr, keeping stdout for the itinerary.
#[derive(Default)]
struct StderrNotifier {
    log: TracingNotifier,
}

fn stderr_line(notification: &Notification) -> String {
    format!("{}: {}", notification.title, notification.message)
}

impl Notifier for StderrNotifier {
    fn notify(&mut self, notification: Notification) {
        eprintln!("{}", stderr_line(&notification));
        self.log.notify(notification);
    }
}

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let mut settings = load_settings();
    if let Some(url) = &cli.planner_url {
        settings.planner_url = url.clone();
    }
    if let Some(secs) = cli.timeout_secs.filter(|secs| *secs > 0) {
        settings.request_timeout_secs = secs;
    }
    let planner = settings
        .planner()
        .with_context(|| format!("invalid planner url '{}'", settings.planner_url))?;

    tracing::debug!(plan_url = %planner.plan_url(), "submitting trip request");

    let mut controller = FormController::new();
    for (field, value) in cli.fields() {
        if let Some(value) = value {
            controller.update_field(field, value.as_str());
        }
    }

    let phase = controller
        .submit(&planner, &mut StderrNotifier::default())
        .await
        .map_err(|reason| anyhow::anyhow!("trip request not sent: {reason}"))?;
    if phase != Phase::ResultReady {
        bail!("trip plan was not generated");
    }

    let PlannerView::Result(result) = controller.view() else {
        bail!("trip plan was not generated");
    };
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result.itinerary)?);
    } else {
        print!("{}", render_itinerary(&result.itinerary, &result.destination));
    }
    Ok(())
}
