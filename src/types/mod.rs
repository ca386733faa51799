pub mod analysis;
pub mod profile;

pub use analysis::{AnalysisResult, Improvement, PriorityAction};
pub use profile::{AccomplishmentProject, Certification, Connections, Education, Experience, Profile};
