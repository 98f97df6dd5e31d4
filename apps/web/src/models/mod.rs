pub mod submission;

pub use submission::ResumeSubmission;
