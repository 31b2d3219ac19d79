//! Interactive text menu over the todo service.
//!
//! A line-oriented prompt loop with no business logic of its own: every
//! mutation goes through [`TodoService`] and rule rejections are printed as
//! returned. Reaching end of input anywhere exits the current menu.

use std::io::{self, Write};

use anyhow::Result;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::constants::{
    ERROR_INVALID_CHOICE, ERROR_INVALID_NUMBER, ERROR_NO_PROJECTS, ERROR_NO_TASKS,
    SUCCESS_PROJECT_CREATED, SUCCESS_PROJECT_DELETED, SUCCESS_PROJECT_UPDATED,
    SUCCESS_STATUS_CHANGED, SUCCESS_TASK_CREATED, SUCCESS_TASK_DELETED, SUCCESS_TASK_UPDATED,
    WARN_BAD_DEADLINE,
};
use crate::entities::{project, task};
use crate::service::TodoService;

/// Interactive menu bound to a service instance.
pub struct Menu {
    service: TodoService,
}

impl Menu {
    pub fn new(service: TodoService) -> Self {
        Self { service }
    }

    /// Run the main menu loop until the user exits.
    pub async fn run(&self) -> Result<()> {
        loop {
            println!("\n{}", "=".repeat(50));
            println!("🎯 Project and Task Management");
            println!("{}", "=".repeat(50));
            println!("1. Manage Projects");
            println!("2. Manage Tasks");
            println!("0. Exit");

            let Some(choice) = prompt("Your choice: ")? else {
                break;
            };
            match choice.as_str() {
                "1" => self.project_menu().await?,
                "2" => self.task_menu().await?,
                "0" => {
                    println!("👋 Goodbye!");
                    break;
                }
                _ => println!("{ERROR_INVALID_CHOICE}"),
            }
        }
        Ok(())
    }

    async fn project_menu(&self) -> Result<()> {
        loop {
            println!("\n{}", "=".repeat(40));
            println!("📁 Project Management");
            println!("{}", "=".repeat(40));
            println!("1. Create New Project");
            println!("2. List Projects");
            println!("3. Edit Project");
            println!("4. Delete Project");
            println!("0. Back to Main Menu");

            let Some(choice) = prompt("Your choice: ")? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => self.create_project().await?,
                "2" => self.list_projects().await?,
                "3" => self.edit_project().await?,
                "4" => self.delete_project().await?,
                "0" => return Ok(()),
                _ => println!("{ERROR_INVALID_CHOICE}"),
            }
        }
    }

    async fn task_menu(&self) -> Result<()> {
        loop {
            println!("\n{}", "=".repeat(40));
            println!("📋 Task Management");
            println!("{}", "=".repeat(40));
            println!("1. Create New Task");
            println!("2. List Tasks");
            println!("3. Edit Task");
            println!("4. Change Task Status");
            println!("5. Delete Task");
            println!("6. Close Overdue Tasks");
            println!("0. Back to Main Menu");

            let Some(choice) = prompt("Your choice: ")? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => self.create_task().await?,
                "2" => self.list_tasks().await?,
                "3" => self.edit_task().await?,
                "4" => self.change_task_status().await?,
                "5" => self.delete_task().await?,
                "6" => self.close_overdue().await?,
                "0" => return Ok(()),
                _ => println!("{ERROR_INVALID_CHOICE}"),
            }
        }
    }

    async fn create_project(&self) -> Result<()> {
        println!("\n=== Create New Project ===");
        let Some(name) = prompt("Project name: ")? else {
            return Ok(());
        };
        let Some(description) = prompt("Project description: ")? else {
            return Ok(());
        };
        let description = non_empty(&description);

        match self.service.create_project(&name, description).await {
            Ok(project) => {
                println!("{SUCCESS_PROJECT_CREATED}: '{}'", project.name);
                println!("🆔 Project ID: {}", project.id);
            }
            Err(e) => println!("❌ Error: {e}"),
        }
        Ok(())
    }

    async fn list_projects(&self) -> Result<()> {
        println!("\n=== Project List ===");
        let projects = self.service.list_projects().await?;
        if projects.is_empty() {
            println!("{ERROR_NO_PROJECTS}");
            return Ok(());
        }

        println!("📊 Total projects: {}", projects.len());
        for (i, project) in projects.iter().enumerate() {
            let tasks = self.service.list_tasks(Some(&project.id)).await?;
            println!("{}. {}", i + 1, project.name);
            println!("   🆔 ID: {}", project.id);
            println!(
                "   📝 Description: {}",
                project.description.as_deref().unwrap_or("-")
            );
            println!("   📋 Tasks: {}", tasks.len());
        }
        Ok(())
    }

    async fn edit_project(&self) -> Result<()> {
        println!("\n=== Edit Project ===");
        let Some(project) = self.pick_project().await? else {
            return Ok(());
        };

        println!("\nEditing project: {} (press Enter to skip)", project.name);
        let Some(name) = prompt("New name: ")? else {
            return Ok(());
        };
        let Some(description) = prompt("New description: ")? else {
            return Ok(());
        };

        match self
            .service
            .edit_project(&project.id, non_empty(&name), non_empty(&description))
            .await
        {
            Ok(project) => println!("{SUCCESS_PROJECT_UPDATED}: '{}'", project.name),
            Err(e) => println!("❌ Error: {e}"),
        }
        Ok(())
    }

    async fn delete_project(&self) -> Result<()> {
        println!("\n=== Delete Project ===");
        let Some(project) = self.pick_project().await? else {
            return Ok(());
        };

        let Some(confirm) = prompt(&format!(
            "Delete '{}' and all of its tasks? (y/N): ",
            project.name
        ))?
        else {
            return Ok(());
        };
        if !confirm.eq_ignore_ascii_case("y") {
            return Ok(());
        }

        match self.service.delete_project(&project.id).await {
            Ok(()) => println!("{SUCCESS_PROJECT_DELETED}"),
            Err(e) => println!("❌ Error: {e}"),
        }
        Ok(())
    }

    async fn create_task(&self) -> Result<()> {
        println!("\n=== Create New Task ===");
        let Some(project) = self.pick_project().await? else {
            return Ok(());
        };

        let Some(title) = prompt("Task title: ")? else {
            return Ok(());
        };
        let Some(description) = prompt("Task description: ")? else {
            return Ok(());
        };

        println!("\nStatus options:");
        println!("1. Todo");
        println!("2. In Progress");
        println!("3. Done");
        let Some(status_choice) = prompt("Status (default: todo): ")? else {
            return Ok(());
        };
        let status = match status_choice.as_str() {
            "2" => Some("in_progress"),
            "3" => Some("done"),
            _ => None,
        };

        let Some(deadline_input) = prompt("Deadline (YYYY-MM-DD) or press Enter to skip: ")?
        else {
            return Ok(());
        };
        let deadline = if deadline_input.is_empty() {
            None
        } else {
            let parsed = parse_deadline(&deadline_input);
            if parsed.is_none() {
                println!("{WARN_BAD_DEADLINE}");
            }
            parsed
        };

        match self
            .service
            .create_task(&project.id, &title, non_empty(&description), status, deadline)
            .await
        {
            Ok(task) => {
                println!("{SUCCESS_TASK_CREATED}: '{}'", task.title);
                println!("🆔 Task ID: {}", task.id);
            }
            Err(e) => println!("❌ Error: {e}"),
        }
        Ok(())
    }

    async fn list_tasks(&self) -> Result<()> {
        println!("\n=== Task List ===");
        let tasks = self.service.list_tasks(None).await?;
        if tasks.is_empty() {
            println!("{ERROR_NO_TASKS}");
            return Ok(());
        }

        println!("📊 Total tasks: {}", tasks.len());
        print_tasks(&tasks);
        Ok(())
    }

    async fn edit_task(&self) -> Result<()> {
        println!("\n=== Edit Task ===");
        let Some(task) = self.pick_task().await? else {
            return Ok(());
        };

        println!("\nEditing task: {} (press Enter to skip)", task.title);
        let Some(title) = prompt("New title: ")? else {
            return Ok(());
        };
        let Some(description) = prompt("New description: ")? else {
            return Ok(());
        };
        let Some(status_input) = prompt("New status (todo/in_progress/done): ")? else {
            return Ok(());
        };
        let Some(deadline_input) = prompt("New deadline (YYYY-MM-DD): ")? else {
            return Ok(());
        };
        let deadline = if deadline_input.is_empty() {
            None
        } else {
            let parsed = parse_deadline(&deadline_input);
            if parsed.is_none() {
                println!("{WARN_BAD_DEADLINE}");
            }
            parsed
        };

        match self
            .service
            .edit_task(
                &task.id,
                non_empty(&title),
                non_empty(&description),
                non_empty(&status_input),
                deadline,
            )
            .await
        {
            Ok(task) => println!("{SUCCESS_TASK_UPDATED}: '{}'", task.title),
            Err(e) => println!("❌ Error: {e}"),
        }
        Ok(())
    }

    async fn change_task_status(&self) -> Result<()> {
        println!("\n=== Change Task Status ===");
        let Some(task) = self.pick_task().await? else {
            return Ok(());
        };

        println!("\nCurrent status: {}", task.status.as_str());
        println!("1. Todo");
        println!("2. In Progress");
        println!("3. Done");
        let Some(choice) = prompt("New status: ")? else {
            return Ok(());
        };
        let status = match choice.as_str() {
            "1" => "todo",
            "2" => "in_progress",
            "3" => "done",
            _ => {
                println!("{ERROR_INVALID_CHOICE}");
                return Ok(());
            }
        };

        match self
            .service
            .edit_task(&task.id, None, None, Some(status), None)
            .await
        {
            Ok(task) => println!("{SUCCESS_STATUS_CHANGED}: {}", task.status.as_str()),
            Err(e) => println!("❌ Error: {e}"),
        }
        Ok(())
    }

    async fn delete_task(&self) -> Result<()> {
        println!("\n=== Delete Task ===");
        let Some(task) = self.pick_task().await? else {
            return Ok(());
        };

        match self.service.delete_task(&task.id).await {
            Ok(()) => println!("{SUCCESS_TASK_DELETED}"),
            Err(e) => println!("❌ Error: {e}"),
        }
        Ok(())
    }

    async fn close_overdue(&self) -> Result<()> {
        let closed = self.service.close_overdue_tasks().await?;
        println!("✅ Closed {closed} overdue tasks.");
        Ok(())
    }

    /// Show the project list and let the user pick one by number.
    async fn pick_project(&self) -> Result<Option<project::Model>> {
        let projects = self.service.list_projects().await?;
        if projects.is_empty() {
            println!("{ERROR_NO_PROJECTS}");
            return Ok(None);
        }

        println!("Available projects:");
        for (i, project) in projects.iter().enumerate() {
            println!("{}. {} (ID: {})", i + 1, project.name, project.id);
        }

        Ok(pick_index(projects.len())?.map(|i| projects[i].clone()))
    }

    /// Show the task list and let the user pick one by number.
    async fn pick_task(&self) -> Result<Option<task::Model>> {
        let tasks = self.service.list_tasks(None).await?;
        if tasks.is_empty() {
            println!("{ERROR_NO_TASKS}");
            return Ok(None);
        }

        print_tasks(&tasks);
        Ok(pick_index(tasks.len())?.map(|i| tasks[i].clone()))
    }
}

fn print_tasks(tasks: &[task::Model]) {
    for (i, task) in tasks.iter().enumerate() {
        let deadline = task
            .deadline
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{}. [{}] {} (deadline: {})",
            i + 1,
            task.status.as_str(),
            task.title,
            deadline
        );
        println!("   🆔 ID: {}", task.id);
    }
}

/// Prompt for a 1-based selection; out-of-range input cancels the operation.
fn pick_index(len: usize) -> Result<Option<usize>> {
    let Some(input) = prompt("\nNumber: ")? else {
        return Ok(None);
    };
    match input.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Ok(Some(n - 1)),
        _ => {
            println!("{ERROR_INVALID_NUMBER}");
            Ok(None)
        }
    }
}

/// Read one trimmed line; `None` means the input stream is closed.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Enter-to-skip semantics: an empty answer means "no value".
fn non_empty(input: &str) -> Option<&str> {
    if input.is_empty() {
        None
    } else {
        Some(input)
    }
}

fn parse_deadline(input: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}
