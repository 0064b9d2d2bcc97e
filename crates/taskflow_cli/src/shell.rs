//! Text menu that maps keystrokes to tracker service calls.
//!
//! # Invariants
//! - Service errors are printed and the loop resumes; only I/O errors end it.
//! - End of input at the menu prompt exits cleanly.

use anyhow::{anyhow, bail, Context};
use log::info;
use std::io::{BufRead, Write};
use taskflow_core::{EntityId, Priority, TaskStatus, TaskTracker};

const MENU: &str = "\
==================================================
1. Create project
2. Create task
3. Assign task
4. Change task status
5. List projects
6. List project tasks
7. Project progress
8. Register user
9. Delete project
0. Exit
==================================================";

pub struct Shell<'t, R, W> {
    tracker: &'t mut TaskTracker,
    input: R,
    output: W,
    acting_user: Option<EntityId>,
}

impl<'t, R: BufRead, W: Write> Shell<'t, R, W> {
    pub fn new(
        tracker: &'t mut TaskTracker,
        input: R,
        output: W,
        acting_user: Option<EntityId>,
    ) -> Self {
        Self {
            tracker,
            input,
            output,
            acting_user,
        }
    }

    /// Runs the menu loop until `0` or end of input.
    pub fn run(mut self) -> anyhow::Result<()> {
        writeln!(self.output, "=== Taskflow ===")?;
        if let Some(user) = self
            .acting_user
            .and_then(|user_id| self.tracker.users().get_user(user_id))
        {
            writeln!(self.output, "Acting as: {}", user.name)?;
        }

        loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(choice) = self.read_line("Choose an action: ")? else {
                break;
            };

            let outcome = match choice.as_str() {
                "1" => self.create_project(),
                "2" => self.create_task(),
                "3" => self.assign_task(),
                "4" => self.update_status(),
                "5" => self.list_projects(),
                "6" => self.list_tasks(),
                "7" => self.project_progress(),
                "8" => self.register_user(),
                "9" => self.delete_project(),
                "0" => break,
                _ => Err(anyhow!("unknown choice `{choice}`")),
            };

            if let Err(err) = outcome {
                writeln!(self.output, "✗ Error: {err:#}")?;
            }
        }

        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    fn create_project(&mut self) -> anyhow::Result<()> {
        let owner_id = self.require_acting_user()?;
        let name = self.prompt("Project name: ")?;
        let description = self.prompt("Description: ")?;

        let project = self
            .tracker
            .projects()
            .create_project(name, description, owner_id)?;
        writeln!(self.output, "✓ Project created: {project}")?;
        Ok(())
    }

    fn create_task(&mut self) -> anyhow::Result<()> {
        let title = self.prompt("Title: ")?;
        let description = self.prompt("Description: ")?;
        let project_id = self.prompt_id("Project id: ")?;
        let priority = parse_priority_choice(
            &self.prompt("Priority 1-LOW, 2-MEDIUM, 3-HIGH, 4-CRITICAL (default MEDIUM): ")?,
        );

        let task = self
            .tracker
            .tasks()
            .create_task(title, description, project_id, priority)?;
        writeln!(self.output, "✓ Task created: {task}")?;
        Ok(())
    }

    fn assign_task(&mut self) -> anyhow::Result<()> {
        let task_id = self.prompt_id("Task id: ")?;
        let user_id = self.prompt_id("User id: ")?;

        self.tracker.tasks().assign_task(task_id, user_id)?;
        writeln!(self.output, "✓ Task assigned")?;
        Ok(())
    }

    fn update_status(&mut self) -> anyhow::Result<()> {
        let task_id = self.prompt_id("Task id: ")?;
        let choice = self.prompt("Status 1-NEW, 2-IN_PROGRESS, 3-IN_REVIEW, 4-COMPLETED: ")?;
        let status = parse_status_choice(&choice)
            .ok_or_else(|| anyhow!("invalid status choice `{choice}`"))?;

        self.tracker.tasks().update_task_status(task_id, status)?;
        writeln!(self.output, "✓ Status updated")?;
        Ok(())
    }

    fn list_projects(&mut self) -> anyhow::Result<()> {
        let projects = self.tracker.projects();
        let listed = projects.get_all_projects();
        if listed.is_empty() {
            writeln!(self.output, "No projects")?;
            return Ok(());
        }

        for project in listed {
            let progress = match project.id {
                Some(project_id) => projects.get_project_progress(project_id)?,
                None => 0.0,
            };
            writeln!(self.output, "{project} progress={progress:.1}%")?;
        }
        Ok(())
    }

    fn list_tasks(&mut self) -> anyhow::Result<()> {
        let project_id = self.prompt_id("Project id: ")?;
        let tasks = self.tracker.tasks().get_tasks_by_project(project_id);
        if tasks.is_empty() {
            writeln!(self.output, "No tasks")?;
            return Ok(());
        }

        for task in tasks {
            writeln!(self.output, "{task}")?;
        }
        Ok(())
    }

    fn project_progress(&mut self) -> anyhow::Result<()> {
        let project_id = self.prompt_id("Project id: ")?;
        let progress = self.tracker.projects().get_project_progress(project_id)?;
        writeln!(self.output, "Progress: {progress:.1}%")?;
        Ok(())
    }

    fn register_user(&mut self) -> anyhow::Result<()> {
        let name = self.prompt("Name: ")?;
        let email = self.prompt("Email: ")?;
        let role = self.prompt("Role admin|member (default member): ")?;
        let role = (!role.is_empty()).then_some(role.as_str());

        let user = self.tracker.users().register_user(name, email, role)?;
        writeln!(self.output, "✓ User registered: {user}")?;

        if self.acting_user.is_none() {
            self.acting_user = user.id;
            info!(
                "event=acting_user module=shell status=ok user_id={}",
                user.id.unwrap_or_default()
            );
            writeln!(self.output, "Acting as: {}", user.name)?;
        }
        Ok(())
    }

    fn delete_project(&mut self) -> anyhow::Result<()> {
        let requester = self.require_acting_user()?;
        let project_id = self.prompt_id("Project id: ")?;

        self.tracker
            .projects()
            .delete_project(project_id, requester)?;
        writeln!(self.output, "✓ Project deleted")?;
        Ok(())
    }

    fn require_acting_user(&self) -> anyhow::Result<EntityId> {
        self.acting_user
            .ok_or_else(|| anyhow!("no acting user; register one first (menu 8)"))
    }

    /// Reads one trimmed line, or `None` at end of input.
    fn read_line(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, label: &str) -> anyhow::Result<String> {
        match self.read_line(label)? {
            Some(value) => Ok(value),
            None => bail!("input closed"),
        }
    }

    fn prompt_id(&mut self, label: &str) -> anyhow::Result<EntityId> {
        let value = self.prompt(label)?;
        value
            .parse::<EntityId>()
            .with_context(|| format!("`{value}` is not a valid id"))
    }
}

fn parse_priority_choice(choice: &str) -> Priority {
    match choice {
        "1" => Priority::Low,
        "3" => Priority::High,
        "4" => Priority::Critical,
        _ => Priority::Medium,
    }
}

fn parse_status_choice(choice: &str) -> Option<TaskStatus> {
    match choice {
        "1" => Some(TaskStatus::New),
        "2" => Some(TaskStatus::InProgress),
        "3" => Some(TaskStatus::InReview),
        "4" => Some(TaskStatus::Completed),
        _ => None,
    }
}
