// src/specs/mod.rs
//! # Bulletin line "specs"
//!
//! This module knows how to **read one bulletin line**. A bulletin line looks like
//!
//! ```text
//! "ЗАРЯ" – УРАЛМАШ – 3-1 (0-1). 31.03. Ст-н Авангард. 7000 зр. Судья – Лушин.
//!     Состав: Кубышкин, ..., Лукьянчук (Иванов, 46). Голы: Колесников 69, ...
//! ```
//!
//! and is segmented by anchoring on fixed keywords rather than one big regex:
//! the free-form middle (date, stadium, attendance, substitutions with minute
//! numbers) cannot be bounded by a single pattern, but the keyword positions can.
//!
//! ## What lives here
//! - `line` – the classifier deciding whether a line is a report at all.
//! - `fields` – extractors for label, team names, referee, roster, scorers.
//! - `record` – turning the extracted fields into one or two `MatchRecord`s.
//!
//! ## What does **not** live here
//! - Aggregation into tables (`store`), sorting (`sort`), session state and the
//!   error list (`session`), and anything touching files or the GUI.
//!
//! ## Conventions
//! - Extractors are total: malformed text yields a `ParseErrorKind` (or `None`
//!   for "no roster"/"no scorers"), never a panic.
//! - Byte offsets only come from `str::find`; character-count trims go through
//!   `core::text::trim_chars`.
pub mod fields;
pub mod line;
pub mod record;

pub use line::is_report_line;
pub use record::{build_records, MatchRecord};
