//! Viewer for the 3D trajectory (x, y, z) from outp_.csv.

use sim_plots::PlotSpec;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    sim_plots::run(PlotSpec::trajectory_3d())
}
