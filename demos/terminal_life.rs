use life_seed::sim::run;
use life_seed::{CellState, SimConfig, Simulation, ToroidalGrid};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn print_frame(generation: u64, grid: &ToroidalGrid<CellState>) {
    let mut out = format!("generation {generation}\n");
    for (c, s) in grid.iter() {
        out.push(if s.is_alive() { '#' } else { '.' });
        if c.x as usize == grid.width() - 1 {
            out.push('\n');
        }
    }
    println!("{out}");
}

fn main() {
    init_tracing();

    // Usage: terminal_life [apgcode] [generations]
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(code) => SimConfig::with_pattern(40, 20, &code),
        None => SimConfig::new(60, 24, 42),
    };
    let generations = args.next().and_then(|g| g.parse().ok()).unwrap_or(20);

    let mut sim = match Simulation::new(&config) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    let summary = run(&mut sim, generations, true, &mut print_frame);
    eprintln!(
        "ran {} ticks, final population {}{}",
        summary.ticks,
        summary.final_population,
        if summary.stabilized { " (stable)" } else { "" }
    );
}
