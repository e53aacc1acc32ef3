//! Demo entry point: runs the simulation with a terminal front end.

use pulsar_grid::game::demo::game_loop::run_game_loop;

fn main() {
    // Logger configuration comes from the environment.
    env_logger::init();

    if let Err(err) = run_game_loop() {
        eprintln!("fatal: {err}");
        std::process::exit(1);
    }
}
