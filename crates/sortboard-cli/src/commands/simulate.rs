//! Scripted sessions against a virtual clock.
//!
//! The script is a flat token list, e.g.:
//!
//! ```text
//! sortboard-cli simulate pick Apple pick Broccoli return Apple wait 5000
//! ```
//!
//! Time only advances through `wait`, which also ticks the board, so runs
//! are deterministic and instant.

use sortboard_core::{Config, Event, SortBoard};

pub fn run(delay_ms: Option<u64>, script: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let delay = delay_ms.unwrap_or(config.board.return_delay_ms);
    let mut board = SortBoard::new(config.registry(), delay);

    let mut now: u64 = 0;
    let mut events: Vec<Event> = Vec::new();

    let mut tokens = script.iter();
    while let Some(op) = tokens.next() {
        match op.as_str() {
            "pick" => {
                let key = tokens.next().ok_or("'pick' needs an item name")?;
                let id = resolve(&board, key)?;
                events.push(board.pick_at(&id, now)?);
            }
            "return" => {
                let key = tokens.next().ok_or("'return' needs an item name")?;
                let id = resolve(&board, key)?;
                events.push(board.put_back(&id)?);
            }
            "wait" => {
                let arg = tokens.next().ok_or("'wait' needs a duration in ms")?;
                let ms: u64 = arg
                    .parse()
                    .map_err(|_| format!("invalid duration: {arg}"))?;
                now += ms;
                events.extend(board.tick_at(now));
            }
            "show" => events.push(board.snapshot()),
            other => return Err(format!("unknown script op: {other}").into()),
        }
    }

    events.push(board.snapshot());
    println!("{}", serde_json::to_string_pretty(&events)?);
    Ok(())
}

fn resolve(board: &SortBoard, key: &str) -> Result<String, Box<dyn std::error::Error>> {
    match board.locate(key) {
        Some((item, _)) => Ok(item.id.clone()),
        None => Err(format!("no item matches '{key}'").into()),
    }
}
