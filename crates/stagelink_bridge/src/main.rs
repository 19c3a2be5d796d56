//! Interactive bridge shell.
//!
//! Runs the object command set against a scratch in-memory scene, one
//! command per line on stdin. Useful for poking at the protocol without a
//! connected authoring tool.

use std::io::{self, BufRead, Write};

use stagelink_bridge::Dispatcher;
use stagelink_scene::SceneWorld;

fn main() -> io::Result<()> {
    env_logger::init();

    let dispatcher = Dispatcher::with_object_handlers();
    let mut world = SceneWorld::with_builtin_assets();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Stagelink bridge - one command per line, 'exit' to quit");
    prompt(&mut stdout)?;
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed == "exit" || trimmed == "quit" {
            break;
        }
        if !trimmed.is_empty() {
            match dispatcher.dispatch(&line, &mut world) {
                Ok(response) => println!("{response}"),
                Err(err) => println!("? {err}"),
            }
        }
        prompt(&mut stdout)?;
    }
    Ok(())
}

fn prompt(stdout: &mut io::Stdout) -> io::Result<()> {
    write!(stdout, "link> ")?;
    stdout.flush()
}
