//! PlantUML export of a transition table.
//!
//! Renders the initial state and every transition, in declaration order, as a
//! PlantUML state diagram. The prefix shared by all event labels is stripped
//! to keep edge labels short.
//!
//! # Example
//!
//! ```rust
//! use switchyard::builder::EngineBuilder;
//! use switchyard::diagram::{self, DiagramOptions};
//! use switchyard::state_enum;
//!
//! state_enum! {
//!     enum Light {
//!         Red,
//!         Green,
//!     }
//! }
//!
//! #[derive(Debug, PartialEq)]
//! enum Signal {
//!     SignalGo,
//!     SignalStop,
//! }
//!
//! let engine = EngineBuilder::<Light, Signal>::new()
//!     .initial_state(Light::Red)
//!     .on_state(Light::Red, |s| s.on_event(Signal::SignalGo).change_to(Light::Green).no_action())
//!     .on_state(Light::Green, |s| s.on_event(Signal::SignalStop).change_to(Light::Red).no_action())
//!     .build()
//!     .unwrap();
//!
//! let text = diagram::render(&engine, &DiagramOptions { scale: 600 });
//! assert_eq!(
//!     text,
//!     "@startuml\nscale 600 width\n[*] --> Red\nRed --> Green : Go\nGreen --> Red : Stop\n@enduml\n"
//! );
//! ```

mod error;
mod prefix;

pub use error::ExportError;
pub use prefix::{common_prefix, shared_prefix};

use crate::core::State;
use crate::engine::Engine;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Default width passed to the `scale` directive.
pub const DEFAULT_SCALE: u32 = 1000;

/// Rendering options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramOptions {
    /// Width for the `scale <N> width` directive
    pub scale: u32,
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
        }
    }
}

/// One edge as the diagram sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub event: String,
}

/// Read-only view of a transition table that can be rendered.
pub trait TransitionTable {
    /// Name of the initial state.
    fn initial_label(&self) -> String;

    /// Edges in declaration order.
    fn edges(&self) -> Vec<Edge>;
}

impl<S: State, E, R> TransitionTable for Engine<S, E, R> {
    fn initial_label(&self) -> String {
        self.initial_state().name().to_string()
    }

    fn edges(&self) -> Vec<Edge> {
        self.transitions()
            .iter()
            .map(|t| Edge {
                from: t.from().name().to_string(),
                to: t.to().name().to_string(),
                event: t.label(),
            })
            .collect()
    }
}

/// Render `table` as PlantUML text.
pub fn render<T: TransitionTable + ?Sized>(table: &T, options: &DiagramOptions) -> String {
    let mut out = Vec::new();
    // Writing into a Vec<u8> cannot fail.
    let _ = write(table, &mut out, options);
    String::from_utf8_lossy(&out).into_owned()
}

/// Write `table` as PlantUML text to `writer`.
pub fn write<T, W>(table: &T, mut writer: W, options: &DiagramOptions) -> Result<(), ExportError>
where
    T: TransitionTable + ?Sized,
    W: Write,
{
    let edges = table.edges();
    let prefix = shared_prefix(edges.iter().map(|e| e.event.as_str()));

    writeln!(writer, "@startuml")?;
    writeln!(writer, "scale {} width", options.scale)?;
    writeln!(writer, "[*] --> {}", table.initial_label())?;
    for edge in &edges {
        let event = edge.event.strip_prefix(prefix.as_str()).unwrap_or(&edge.event);
        if event.is_empty() {
            writeln!(writer, "{} --> {}", edge.from, edge.to)?;
        } else {
            writeln!(writer, "{} --> {} : {}", edge.from, edge.to, event)?;
        }
    }
    writeln!(writer, "@enduml")?;
    writer.flush()?;
    Ok(())
}

/// Write `table` as PlantUML text to the file at `path`, replacing it.
pub fn write_to_path<T>(
    table: &T,
    path: impl AsRef<Path>,
    options: &DiagramOptions,
) -> Result<(), ExportError>
where
    T: TransitionTable + ?Sized,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), scale = options.scale, "writing diagram");
    write(table, BufWriter::new(file), options)
}
