use std::env;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use clap::{Args, Parser, Subcommand};
use continuity_engine::{Action, WorkloadModelBindings, WorkloadModelGeneration};
use continuity_types::{DEFAULT_PORT, DataHolder, PollPolicy, RestEndpoint};
use tracing::info;

const HOST_ENV: &str = "CONTINUITY_HOST";
const PORT_ENV: &str = "CONTINUITY_PORT";

#[derive(Debug, Parser)]
#[command(name = "continuity", about = "Run ContinuITy experiment actions", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a workload model from monitoring data and wait until it is finished
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Hostname or IP of the ContinuITy frontend [env: CONTINUITY_HOST]
    #[arg(long)]
    host: Option<String>,
    /// Port of the ContinuITy frontend [env: CONTINUITY_PORT, default: 80]
    #[arg(long)]
    port: Option<String>,
    /// Workload model type, e.g. wessbas
    #[arg(long = "type", value_name = "TYPE")]
    wm_type: String,
    /// Tag grouping the workload model with its monitoring data
    #[arg(long)]
    tag: String,
    /// Link used to retrieve the monitoring data
    #[arg(long)]
    data: String,
    /// Start of the monitoring data range (RFC 3339 or local YYYY-MM-DDTHH:MM:SS)
    #[arg(long, value_parser = parse_timestamp)]
    from: Option<DateTime<Local>>,
    /// End of the monitoring data range (RFC 3339 or local YYYY-MM-DDTHH:MM:SS)
    #[arg(long, value_parser = parse_timestamp)]
    to: Option<DateTime<Local>>,
    /// Pause between unfinished wait responses, in milliseconds
    #[arg(long, default_value_t = 0)]
    poll_interval_ms: u64,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
    }
}

fn init_tracing() {
    let filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let endpoint = resolve_endpoint(args.host, args.port)?;
    info!(base_url = %endpoint.base_url(), wm_type = %args.wm_type, tag = %args.tag, "generating workload model");

    let bindings = WorkloadModelBindings {
        data_link: DataHolder::with_value(args.data),
        ..Default::default()
    };
    if let Some(from) = args.from {
        bindings.start_time.set(from);
    }
    if let Some(to) = args.to {
        bindings.stop_time.set(to);
    }

    let poll_policy = PollPolicy {
        interval: Duration::from_millis(args.poll_interval_ms),
        ..PollPolicy::default()
    };
    let generation = WorkloadModelGeneration::new(&endpoint, args.wm_type, args.tag, bindings.clone())
        .context("could not create the workload model generation action")?
        .with_poll_policy(poll_policy);

    let outcome = generation.execute();
    let report = serde_json::json!({
        "result": outcome,
        "workload_link": bindings.workload_link.get(),
        "broken": bindings.broken.get().unwrap_or(false),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    if outcome.is_broken() {
        anyhow::bail!("workload model generation run is broken");
    }
    Ok(())
}

fn resolve_endpoint(host: Option<String>, port: Option<String>) -> Result<RestEndpoint> {
    let host = host
        .or_else(|| env::var(HOST_ENV).ok())
        .filter(|host| !host.trim().is_empty())
        .ok_or_else(|| anyhow!("no frontend host configured; pass --host or set {HOST_ENV}"))?;
    let port = port
        .or_else(|| env::var(PORT_ENV).ok())
        .filter(|port| !port.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PORT.to_string());
    Ok(RestEndpoint::new(host, port))
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Local>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.with_timezone(&Local));
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .with_context(|| format!("invalid timestamp '{raw}'; expected RFC 3339 or YYYY-MM-DDTHH:MM:SS"))?;
    Local
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| anyhow!("timestamp '{raw}' is ambiguous or does not exist in the local time zone"))
}
