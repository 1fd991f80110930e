use clog::Level::*;
use rand::Rng;
fn main() {
    clog::setup_from_env();
    let threads = (0..5).map(|i| {
        std::thread::Builder::new()
            .name(format!("worker {i}"))
            .spawn(move || {
                let mut rng = rand::thread_rng();
                for n in 0..100 {
                    let level = match rng.gen_range(0..4) {
                        0 => Debug,
                        1 => Info,
                        2 => Warning,
                        _ => Error,
                    };
                    if let Err(e) = clog::logf!(level, "worker {i} message {n}") {
                        eprintln!("worker {i} stopped: {e}");
                        return;
                    }
                }
            })
    });
    for t in threads.collect::<Result<Vec<_>, _>>().unwrap() {
        t.join().unwrap();
    }
}
