// demos/headless.rs
// Run with:
//   RUST_LOG=mana=debug cargo run --example headless

use mana_idle::systems::autoplay::{AutoplayConfig, Autoplayer, Policy};
use mana_idle::{GameState, TICKS_PER_SECOND};
use tracing_subscriber::EnvFilter;

const MINUTES: u64 = 10;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cfg = AutoplayConfig { policy: Policy::Cheapest, seed: 2024, ..Default::default() };
    let mut bot = Autoplayer::new(cfg);
    let mut st = GameState::new();
    let per_minute = u64::from(TICKS_PER_SECOND) * 60;

    for minute in 1..=MINUTES {
        bot.run(&mut st, per_minute);
        let snap = st.snapshot();
        match serde_json::to_string(&snap) {
            Ok(line) => println!("{line}"),
            Err(e) => eprintln!("minute {minute}: snapshot not serializable: {e}"),
        }
    }

    let snap = st.snapshot();
    println!("== After {MINUTES} simulated minutes ==");
    println!("{}", snap.mana_line());
    println!("{}", snap.multiplier_line());
    for p in &snap.producers {
        println!("{:<15} Lv {:>3}  cost {:>10.2}  x{:.2}", p.name, p.level, p.cost, p.mana_multiplier);
    }

    let replay = bot.into_replay();
    let rebuilt = replay.play(MINUTES * per_minute);
    println!(
        "replay of {} purchases {}",
        replay.len(),
        if rebuilt == st { "matches" } else { "DIVERGED" }
    );
}
