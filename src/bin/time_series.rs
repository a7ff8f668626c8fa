//! Viewer for the x over time from simple.csv.

use sim_plots::PlotSpec;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    sim_plots::run(PlotSpec::time_series())
}
