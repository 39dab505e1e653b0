use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    #[rustfmt::skip]
    let costs = nalgebra::Matrix4::from_row_slice(
        &[
            82., 83., 69., 92.,
            77., 37., 49., 92.,
            11., 69.,  5., 86.,
             8.,  9., 98., 23.,
        ]
    );

    let matching = jv_matching::min_cost_matching(&costs)?;
    for (row, col) in matching.assignment() {
        println!("row {row} -> column {col} ({})", costs[(row, col)]);
    }
    println!("min total: {}", matching.cost());

    let matching = jv_matching::max_cost_matching(&costs)?;
    println!("max total: {}", matching.cost());
    Ok(())
}
