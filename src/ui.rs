use crate::error::InputError;
use crate::manager::{AddOutcome, MarkOutcome, TaskManager};
use crate::store::TaskStore;
use crate::task::Task;
use crossterm::style::{style, Color, Stylize};
use std::io::{self, BufRead, Write};

const RULE_WIDTH: usize = 70;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Renders every task in insertion order, or the empty-list notice.
pub fn render_tasks(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "\nNo tasks found. Add your first task!\n".to_string();
    }

    let mut out = format!("\n{}\nYOUR TASKS\n{}\n", rule(), rule());
    for task in tasks {
        out.push_str(&format!("\n[{}] Task #{}: {}\n", task.status_glyph(), task.id, task.title));
        if !task.description.is_empty() {
            out.push_str(&format!("    Description: {}\n", task.description));
        }
        let created = if task.created_at.is_empty() { "Unknown" } else { task.created_at.as_str() };
        out.push_str(&format!("    Created: {created}\n"));
        if let Some(completed_at) = &task.completed_at {
            out.push_str(&format!("    Completed: {completed_at}\n"));
        }
    }
    out.push_str(&format!("\n{}\n", rule()));
    out
}

pub fn write_welcome<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "\nWelcome to Task Manager!")
}

/// Text menu over a task manager, reading answers line by line from `input`.
pub struct Menu<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Runs until the user picks Exit or input ends.
    pub fn run<S: TaskStore + ?Sized>(&mut self, manager: &mut TaskManager<'_, S>) -> io::Result<()> {
        loop {
            self.show_menu()?;
            let Some(choice) = self.prompt("\nEnter your choice (1-4): ")? else {
                break;
            };

            match choice.trim() {
                "1" => self.add_task(manager)?,
                "2" => write!(self.output, "{}", render_tasks(manager.tasks()))?,
                "3" => self.mark_done(manager)?,
                "4" => break,
                _ => {
                    writeln!(self.output)?;
                    self.error("Invalid choice. Please enter a number between 1-4.")?;
                }
            }
        }

        writeln!(self.output, "\nThank you for using Task Manager. Goodbye!")?;
        self.output.flush()
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}", rule())?;
        writeln!(self.output, "TASK MANAGER")?;
        writeln!(self.output, "{}", rule())?;
        writeln!(self.output, "1. Add new task")?;
        writeln!(self.output, "2. View all tasks")?;
        writeln!(self.output, "3. Mark task as done")?;
        writeln!(self.output, "4. Exit")?;
        writeln!(self.output, "{}", rule())
    }

    fn add_task<S: TaskStore + ?Sized>(&mut self, manager: &mut TaskManager<'_, S>) -> io::Result<()> {
        writeln!(self.output, "\n--- Add New Task ---")?;
        let Some(title) = self.prompt("Enter task title: ")? else {
            return Ok(());
        };
        // Checked before asking for the description so a blank title aborts early.
        if title.trim().is_empty() {
            return self.error(InputError::EmptyTitle);
        }
        let Some(description) = self.prompt("Enter task description (optional): ")? else {
            return Ok(());
        };

        match manager.add(&title, &description) {
            Ok(AddOutcome::Saved(id)) => {
                self.success(format!("✓ Task added successfully! (ID: {id})"))
            }
            Ok(AddOutcome::NotSaved(_)) => self.failure("✗ Failed to save task."),
            Err(err) => self.error(err),
        }
    }

    fn mark_done<S: TaskStore + ?Sized>(&mut self, manager: &mut TaskManager<'_, S>) -> io::Result<()> {
        if manager.is_empty() {
            return writeln!(self.output, "\nNo tasks available to mark as done.");
        }

        writeln!(self.output, "\n--- Mark Task as Done ---")?;
        let Some(id_text) = self.prompt("Enter task ID to mark as done: ")? else {
            return Ok(());
        };

        match manager.mark_done(&id_text) {
            Ok(MarkOutcome::Marked(id)) => self.success(format!("✓ Task #{id} marked as done!")),
            Ok(MarkOutcome::NotSaved(_)) => self.failure("✗ Failed to save changes."),
            Ok(MarkOutcome::AlreadyDone(id)) => {
                writeln!(self.output, "Task #{id} is already marked as done.")
            }
            Ok(MarkOutcome::NotFound(id)) => self.error(format!("Task #{id} not found.")),
            Err(err) => self.error(err),
        }
    }

    /// Returns `None` once input is exhausted.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn success(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        self.paint(message, Color::Green)
    }

    fn failure(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        self.paint(message, Color::Red)
    }

    fn error(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        self.paint(format!("Error: {message}"), Color::Yellow)
    }

    fn paint(&mut self, message: impl std::fmt::Display, color: Color) -> io::Result<()> {
        if self.color {
            writeln!(self.output, "{}", style(message).with(color))
        } else {
            writeln!(self.output, "{message}")
        }
    }
}
