//! Registry build engine.
//!
//! Single-pass pipeline over the component sources of one project:
//!
//! 1. **Discovery** (`discover`): find component files under `components/ui` and
//!    `components/custom`.
//! 2. **Extraction** (`extract`): derive description, exports, capability flags,
//!    style tokens and dependencies from each file's text.
//! 3. **Synthesis** (`entry`): combine source and metadata into a registry unit,
//!    persisted by `writer`.
//! 4. **Reconciliation** (`reconcile`): remove units of components that no longer exist.
//! 5. **Aggregation** (`index`): summarize the written units into `index.json`.
//!
//! `pipeline` runs the phases in order and collects every outcome into a `BuildReport`.

pub mod discover;
pub mod entry;
pub mod extract;
pub mod index;
pub mod pipeline;
pub mod reconcile;
pub mod writer;

pub use discover::{Category, ComponentSource, DiscoveryResult};
pub use entry::{ComponentSummary, RegistryEntry};
pub use extract::{ComponentMetadata, MetadataExtractor};
pub use index::{IndexStats, RegistryIndex};
pub use pipeline::{BuildError, BuildReport, ComponentFailure, IndexOutcome, RegistryBuilder};
pub use writer::RegistryLayout;
