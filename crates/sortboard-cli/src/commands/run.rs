use std::io::BufRead;
use std::sync::mpsc;
use std::time::Duration;

use sortboard_core::{Config, Event, Slot, SortBoard};

/// How often the board is ticked while waiting for input.
const TICK_INTERVAL: Duration = Duration::from_millis(200);

pub fn run(delay_ms: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let delay = delay_ms.unwrap_or(config.board.return_delay_ms);
    let mut board = SortBoard::new(config.registry(), delay);

    println!("{}", serde_json::to_string_pretty(&board.snapshot())?);
    eprintln!(
        "type an item name to move it (picked items auto-return after {delay} ms); \
         'show' prints the board, 'reset' clears it, 'quit' exits"
    );

    // Single writer: stdin lines are forwarded over a channel and handled
    // here, interleaved with ticks, so board mutations never race.
    let (tx, rx) = mpsc::channel::<String>();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    loop {
        for event in board.tick() {
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        let line = match rx.recv_timeout(TICK_INTERVAL) {
            Ok(line) => line,
            Err(mpsc::RecvTimeoutError::Timeout) => continue,
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        match input {
            "quit" | "q" | "exit" => break,
            "show" => println!("{}", serde_json::to_string_pretty(&board.snapshot())?),
            "reset" => println!("{}", serde_json::to_string_pretty(&board.reset())?),
            key => match toggle(&mut board, key) {
                Ok(event) => println!("{}", serde_json::to_string_pretty(&event)?),
                Err(message) => eprintln!("error: {message}"),
            },
        }
    }

    // Teardown: no countdown outlives the session.
    board.reset();
    Ok(())
}

/// Pick an available item, or return a column item to the pool.
fn toggle(board: &mut SortBoard, key: &str) -> Result<Event, String> {
    let Some((item, slot)) = board.locate(key) else {
        return Err(format!("no item matches '{key}'"));
    };
    let id = item.id.clone();
    let result = match slot {
        Slot::Available => board.pick(&id),
        Slot::InColumn(_) => board.put_back(&id),
    };
    result.map_err(|e| e.to_string())
}
