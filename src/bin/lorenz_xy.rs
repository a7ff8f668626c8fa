//! Viewer for the Lorenz phase portrait (x against y) from lorenz.csv.

use sim_plots::PlotSpec;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    sim_plots::run(PlotSpec::lorenz_xy())
}
