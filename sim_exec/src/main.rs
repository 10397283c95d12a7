//! # Simulation Executable
//!
//! Runs a single trajectory following simulation and writes the reference,
//! measurement and estimated path tables for visualisation.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use std::path::PathBuf;

use color_eyre::{eyre::WrapErr, Result};
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};
use structopt::StructOpt;

use sim_lib::{export::ExchangeTables, params::SimParams, path_gen, sim};
use util::{
    archive::Archived,
    logger::{logger_init, LevelFilter},
    session::Session,
};

// ------------------------------------------------------------------------------------------------
// CLI
// ------------------------------------------------------------------------------------------------

#[derive(Debug, StructOpt)]
#[structopt(
    name = "sim_exec",
    about = "Simulates a vehicle following a reference path and exports the paths as CSV"
)]
struct Opts {
    /// Parameter file to load
    #[structopt(long, parse(from_os_str), default_value = "params/sim_exec.toml")]
    params: PathBuf,

    /// Directory in which the session directory is created
    #[structopt(long, parse(from_os_str), default_value = "sessions")]
    sessions_dir: PathBuf,

    /// Directory to write the tables into, defaults to the session's archive
    #[structopt(long, parse(from_os_str))]
    out_dir: Option<PathBuf>,

    /// Override the random seed from the parameter file
    #[structopt(long)]
    seed: Option<u64>,

    /// Log every simulation step
    #[structopt(short, long)]
    verbose: bool,
}

// ------------------------------------------------------------------------------------------------
// MAIN
// ------------------------------------------------------------------------------------------------

fn main() -> Result<()> {
    color_eyre::install()?;

    let opts = Opts::from_args();

    // ---- EARLY INITIALISATION ----

    let session =
        Session::new("sim_exec", &opts.sessions_dir).wrap_err("Failed to create the session")?;

    let level = if opts.verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    logger_init(level, &session).wrap_err("Failed to initialise logging")?;

    info!("Trajectory Simulation\n");
    info!("Session directory: {:?}\n", session.session_root);
    debug!("CLI options: {:?}", opts);

    // ---- LOAD PARAMETERS ----

    let mut params: SimParams = util::params::load(&opts.params)
        .wrap_err_with(|| format!("Could not load parameters from {:?}", opts.params))?;

    if let Some(seed) = opts.seed {
        info!("Overriding parameter seed {} with {}", params.rng_seed, seed);
        params.rng_seed = seed;
    }

    params.validate().wrap_err("Invalid parameters")?;
    debug!("Parameters: {:#?}", params);

    // ---- PATH GENERATION ----

    let mut rng = StdRng::seed_from_u64(params.rng_seed);
    let paths = path_gen::generate(
        params.step_count,
        params.path_duration_s,
        params.noise_std_dev_m,
        &mut rng,
    )
    .wrap_err("Failed to generate the reference path")?;

    // ---- SIMULATION ----

    let result = sim::run(&params, &paths.reference).wrap_err("Simulation failed")?;

    if let Some(summary) = result.summary(&paths.reference) {
        info!("Run summary:");
        info!("    Steps: {}", summary.num_steps);
        info!("    Final state: {:?}", summary.final_state);
        info!("    RMS position error: {:.4} m", summary.rms_position_error_m);
        info!("    Max position error: {:.4} m", summary.max_position_error_m);
        info!("    Max steering: {:.4} rad", summary.max_abs_steer_rad);
        info!("    Rate limited steps: {}", summary.num_rate_limited);

        session
            .save_json("summary.json", &summary)
            .wrap_err("Failed to save the run summary")?;
    }

    // ---- EXPORT ----

    let out_dir = opts
        .out_dir
        .clone()
        .unwrap_or_else(|| session.arch_root.clone());

    ExchangeTables::new(&out_dir, &paths, &result)
        .wrap_err("Run outputs are inconsistent")?
        .write()
        .wrap_err("Failed to write the output tables")?;

    info!("Simulation complete");

    Ok(())
}
