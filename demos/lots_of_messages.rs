use clog::Level::*;
use rand::Rng;
fn main() -> clog::LogResult<()> {
    let mut rng = rand::thread_rng();
    clog::setup(Info, true);
    for _ in 0..250 {
        clog::log(
            match rng.gen_range(0..4) {
                0 => Debug,
                1 => Info,
                2 => Warning,
                _ => Error,
            },
            "log message",
        )?;
        std::thread::sleep(std::time::Duration::from_millis(25));
    }
    Ok(())
}
