use fitness_tracker::{Training, read_package};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example: one running package, 15000 steps over an hour at 75 kg
    let workout = read_package("RUN", &[15000.0, 1.0, 75.0])?;
    println!("{}", workout.summarize());
    println!("{}", serde_json::to_string_pretty(&workout.summarize())?);
    Ok(())
}
