use clog::Level;

fn main() -> clog::LogResult<()> {
    clog::setup(Level::Debug, true);
    clog::debug("logged a message")?;
    clog::info("logged another message")?;
    clog::warningf!("{} of {} disks are almost full", 1, 3)?;
    clog::error("logged an error")?;
    clog::panicf!("The end is {}!", "nigh")
}
