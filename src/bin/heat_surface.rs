//! Viewer for the heat-equation lines and surface from outp_.csv.

use sim_plots::PlotSpec;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    sim_plots::run(PlotSpec::heat_surface())
}
