fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut path = String::new();
    println!("path: ");
    std::io::stdin().read_line(&mut path)?;
    let file = std::fs::File::create(path.trim())?;
    clog::setup(clog::Level::Debug, false);
    clog::set_output(file);
    clog::info("logged a message")?;
    clog::debug("logged another message")?;
    Ok(())
}
