pub mod lsat;
pub mod modules;
pub mod sat;
pub mod uk;

pub use lsat::{LsatProjection, LsatResult, clamp_lsat_raw, compute_lsat_score, project_lsat};
pub use modules::{Credits, Module, ModuleSheet, Year};
pub use sat::{
    Difficulty, DifficultyChoice, MathRaw, SatResult, ScoreInput, TestMode, compute_sat_score,
};
pub use uk::{UkError, UkResult, compute_uk_average};
