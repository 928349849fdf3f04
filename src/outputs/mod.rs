//! Output generation: HTML pages, the dated archive, and the JSON export.
//!
//! # Submodules
//!
//! - [`html`]: Renders the digest and index pages through one shared layout
//! - [`archive`]: Writes dated digest directories and rebuilds the index from them
//! - [`json`]: Optional `digest.json` export of a run's selection
//!
//! # Output Structure
//!
//! ```text
//! out_dir/
//! ├── index.html             # Latest digest + archive list (26 most recent)
//! ├── 2026-10-10/
//! │   └── index.html         # One digest per run day
//! └── 2026-10-17/
//!     ├── index.html
//!     └── digest.json        # With --write-json
//! ```

pub mod archive;
pub mod html;
pub mod json;
