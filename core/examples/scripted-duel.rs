//! Runs a scripted duel headless and prints the final snapshot JSON.
//!
//! Usage:
//!   cargo run -p brawlz-core --example scripted-duel -- [idle|rush|trade] > snapshot.json

use brawlz_core::*;

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "rush".to_string());

    let script: Vec<(Tick, InputEvent)> = match mode.as_str() {
        "idle" => {
            // Nobody touches a key; the duel idles for the whole horizon.
            Vec::new()
        }
        "rush" => {
            // P1 walks in and swings on every closed window until the KO.
            let mut script = vec![(0, InputEvent::Down(Key::KeyD))];
            for i in 0..20 {
                let t = 30 + i * 45;
                script.push((t, InputEvent::Down(Key::KeyF)));
                script.push((t + 10, InputEvent::Up(Key::KeyF)));
            }
            script
        }
        "trade" => {
            // Both fighters close the gap and exchange swings.
            let mut script = vec![
                (0, InputEvent::Down(Key::KeyD)),
                (0, InputEvent::Down(Key::ArrowLeft)),
                (25, InputEvent::Up(Key::KeyD)),
                (25, InputEvent::Up(Key::ArrowLeft)),
            ];
            for i in 0..20 {
                script.push((30 + i * 45, InputEvent::Down(Key::KeyF)));
                script.push((40 + i * 50, InputEvent::Down(Key::Slash)));
            }
            script.sort_by_key(|(t, _)| *t);
            script
        }
        _ => {
            eprintln!("Unknown mode: {}. Use 'idle', 'rush', or 'trade'", mode);
            std::process::exit(1);
        }
    };

    let mut duel = Duel::new(default_config());
    let mut cursor = 0;
    for tick in 0..3600u32 {
        while cursor < script.len() && script[cursor].0 == tick {
            duel.handle_input(script[cursor].1);
            cursor += 1;
        }
        duel.tick();
        if duel.over() {
            break;
        }
    }

    eprintln!("=== Duel result ({} mode) ===", mode);
    eprintln!("Final tick: {}", duel.tick_count);
    eprintln!("Over: {}", duel.over());
    eprintln!("Winner: {:?}", duel.winner);
    eprintln!(
        "Health: P1={}, P2={}",
        duel.fighters[0].health, duel.fighters[1].health
    );

    println!("{}", serde_json::to_string(&duel.snapshot()).unwrap());
}
