use crate::{
    domain::{Status, Task},
    error::{KancliError, Result},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Tasks the board starts out with
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    pub tasks: Vec<Task>,
}

impl Seed {
    /// The built-in sample board
    pub fn sample() -> Self {
        Self {
            tasks: vec![
                Task::new(Status::ToDo, "Buy Milk", "Strawberry milk"),
                Task::new(Status::ToDo, "Eat Sushi", "nigiri"),
                Task::new(Status::ToDo, "Fold laundry", "or wear wrinkly t shirt"),
                Task::new(Status::InProgress, "Write Code", "In Rust"),
                Task::new(Status::InProgress, "KanbanCLI", "3/5 Progress"),
                Task::new(Status::Done, "Stay Cool", "as a cucumber"),
                Task::new(
                    Status::Done,
                    "Basic Structure",
                    "Styling and switching between multiple lists",
                ),
            ],
        }
    }
}

/// Where the initial tasks come from
#[async_trait]
pub trait SeedSource: Send + Sync {
    async fn load(&self) -> Result<Seed>;
}

pub struct SampleSeed;

#[async_trait]
impl SeedSource for SampleSeed {
    async fn load(&self) -> Result<Seed> {
        Ok(Seed::sample())
    }
}

/// Seed read from a JSON file
pub struct FileSeed {
    path: PathBuf,
}

impl FileSeed {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl SeedSource for FileSeed {
    async fn load(&self) -> Result<Seed> {
        if !self.path.exists() {
            return Err(KancliError::SeedNotFound(self.path.clone()));
        }

        let contents = fs::read_to_string(&self.path).await?;
        let seed: Seed = serde_json::from_str(&contents)?;

        tracing::debug!(path = %self.path.display(), tasks = seed.tasks.len(), "seed file loaded");
        Ok(seed)
    }
}
