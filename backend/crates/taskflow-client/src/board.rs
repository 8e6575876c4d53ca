//! Interactive board: terminal rendition of the form+list view.
//!
//! All UI state flows through `ViewState`; this module only renders it
//! and translates stdin commands plus server responses into transitions.

use crate::client::{ApiClient, ClientResult};
use crate::models::Project;
use crate::view::ViewState;

use std::io::{self, BufRead, Write};

use chrono::DateTime;

pub async fn run(client: &ApiClient) -> ClientResult<()> {
    let mut state = ViewState::new();

    println!("Loading projects...");
    state = match client.list_projects().await {
        Ok(projects) => state.list_loaded(projects),
        Err(e) => state.load_failed(e.to_string()),
    };

    let stdin = io::stdin();

    loop {
        render(&state);

        print!("> ");
        io::stdout().flush().ok();

        let Some(line) = read_line(&stdin) else {
            break;
        };
        let line = line.trim().to_string();
        let mut parts = line.split_whitespace();

        match parts.next() {
            Some("q") | Some("quit") => break,
            Some("r") | Some("reload") => {
                state = state.load_started();
                state = match client.list_projects().await {
                    Ok(projects) => state.list_loaded(projects),
                    Err(e) => state.load_failed(e.to_string()),
                };
            }
            Some("c") | Some("create") => {
                state = create_flow(client, &stdin, state).await;
            }
            Some("e") | Some("edit") => match select(&state, parts.next()) {
                Some(project) => {
                    let id = project.id.clone();
                    state = edit_flow(client, &stdin, state.edit_requested(&id)).await;
                }
                None => println!("Usage: e <number>"),
            },
            Some("d") | Some("delete") => match select(&state, parts.next()) {
                Some(project) => {
                    let (id, name) = (project.id.clone(), project.name.clone());
                    state = delete_flow(client, &stdin, state, &id, &name).await;
                }
                None => println!("Usage: d <number>"),
            },
            Some(_) => {
                println!(
                    "Commands: c(reate), e(dit) <n>, d(elete) <n>, r(eload), q(uit)"
                );
            }
            None => {}
        }
    }

    Ok(())
}

/// Prompt for name and description, then create.
async fn create_flow(client: &ApiClient, stdin: &io::Stdin, state: ViewState) -> ViewState {
    let Some(name) = prompt(stdin, "Project name: ") else {
        return state;
    };
    if name.trim().is_empty() {
        println!("A name is required.");
        return state;
    }
    let description = prompt(stdin, "Description (optional): ").unwrap_or_default();
    let description = if description.trim().is_empty() {
        None
    } else {
        Some(description)
    };

    match client.create_project(name.trim(), description.as_deref()).await {
        Ok(project) => {
            println!("Created '{}'.", project.name);
            state.created(project)
        }
        Err(e) => {
            let state = state.action_failed(format!("Failed to create project: {}", e));
            alert(&state);
            state
        }
    }
}

/// The edit form: empty input keeps the stored value, "cancel" backs out.
async fn edit_flow(client: &ApiClient, stdin: &io::Stdin, state: ViewState) -> ViewState {
    let Some(id) = state.editing_id().map(String::from) else {
        return state;
    };

    println!(
        "Editing: {} (enter keeps the current value, 'cancel' aborts)",
        state.form.name
    );

    let name = match prompt(stdin, &format!("Name [{}]: ", state.form.name)) {
        Some(input) if input.trim() == "cancel" => return state.edit_cancelled(),
        Some(input) if !input.trim().is_empty() => Some(input.trim().to_string()),
        _ => None,
    };
    let description = match prompt(stdin, &format!("Description [{}]: ", state.form.description)) {
        Some(input) if input.trim() == "cancel" => return state.edit_cancelled(),
        Some(input) if !input.trim().is_empty() => Some(input.trim().to_string()),
        _ => None,
    };

    if name.is_none() && description.is_none() {
        println!("Nothing to change.");
        return state.edit_cancelled();
    }

    match client
        .update_project(&id, name.as_deref(), description.as_deref())
        .await
    {
        Ok(project) => {
            println!("Updated '{}'.", project.name);
            state.updated(project)
        }
        Err(e) => {
            let state = state.action_failed(format!("Failed to update project: {}", e));
            alert(&state);
            state.edit_cancelled()
        }
    }
}

/// Confirm, then delete.
async fn delete_flow(
    client: &ApiClient,
    stdin: &io::Stdin,
    state: ViewState,
    id: &str,
    name: &str,
) -> ViewState {
    let confirmed = prompt(stdin, &format!("Delete '{}'? [y/N] ", name))
        .map(|answer| answer.trim().eq_ignore_ascii_case("y"))
        .unwrap_or(false);
    if !confirmed {
        return state;
    }

    match client.delete_project(id).await {
        Ok(message) => {
            println!("{}", message);
            state.deleted(id)
        }
        Err(e) => {
            let state = state.action_failed(format!("Failed to delete project: {}", e));
            alert(&state);
            state
        }
    }
}

fn render(state: &ViewState) {
    println!();
    println!("TaskFlow - My Projects ({})", state.projects.len());

    if state.loading {
        println!("  Loading projects...");
        return;
    }

    if let Some(ref notice) = state.notice {
        println!("  ! {}", notice);
    }

    if state.projects.is_empty() {
        println!("  No projects yet. 'c' creates the first one.");
        return;
    }

    for (index, project) in state.projects.iter().enumerate() {
        println!(
            "  {:>2}. {}  -  {}  ({})",
            index + 1,
            project.name,
            project
                .description
                .as_deref()
                .unwrap_or("No description provided"),
            format_date(project.created_at),
        );
    }
}

fn alert(state: &ViewState) {
    if let Some(ref notice) = state.notice {
        println!("! {}", notice);
    }
}

/// Resolve a 1-based list index argument against the cached list.
fn select<'a>(state: &'a ViewState, arg: Option<&str>) -> Option<&'a Project> {
    let index: usize = arg?.parse().ok()?;
    state.projects.get(index.checked_sub(1)?)
}

fn prompt(stdin: &io::Stdin, label: &str) -> Option<String> {
    print!("{}", label);
    io::stdout().flush().ok();
    read_line(stdin)
}

fn read_line(stdin: &io::Stdin) -> Option<String> {
    let mut line = String::new();
    match stdin.lock().read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        Err(_) => None,
    }
}

fn format_date(epoch_seconds: i64) -> String {
    DateTime::from_timestamp(epoch_seconds, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "unknown date".to_string())
}
