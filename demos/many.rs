use jv_matching::Matcher;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

const ASSIGNMENT_SIZE: usize = 64;
const N: usize = 100;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let matcher = Matcher::new();
    let mut total_cost = 0.;
    for _ in 0..N {
        let costs = nalgebra::DMatrix::<f64>::new_random(ASSIGNMENT_SIZE, ASSIGNMENT_SIZE);
        let matching = matcher.min_cost_matching(&costs)?;
        total_cost += matching.assignment().map(|a| costs[a]).sum::<f64>();
    }

    log::info!("total: {total_cost}");
    Ok(())
}
