use std::io;
use task_manager::{logging, ui, Config, JsonStore, Menu, TaskManager};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init()?;
    let config = Config::default();

    let stdout = io::stdout();
    ui::write_welcome(&mut stdout.lock())?;

    let store = JsonStore::new(config.tasks_file.clone());
    let mut manager = TaskManager::open(&store);

    let mut menu = Menu::new(io::stdin().lock(), stdout.lock(), config.color);
    menu.run(&mut manager)?;
    Ok(())
}
