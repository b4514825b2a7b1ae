//! mindspark - random creative prompts with streaks and favorites
//!
//! The library is the state core: catalog, draws, history, favorites,
//! stats and persistence behind one `Spark` controller. Rendering and
//! input live in the binary.

pub mod app;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod favorites;
pub mod history;
pub mod idea;
pub mod persistence;
pub mod schedule;
pub mod selection;
pub mod session;
pub mod stats;
pub mod storage;
pub mod ui;

pub use app::{AppState, Notice, Options, SharePayload, Spark, UiEvent, View};
pub use catalog::{Category, IdeaCatalog};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Result, SparkError, StorageError};
pub use idea::Idea;
pub use schedule::{Scheduler, Task};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
