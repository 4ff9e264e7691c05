pub mod hackathon;
pub mod participant;
pub mod questionnaire_answer;
pub mod team;
pub mod team_member;

pub use hackathon::Hackathon;
pub use participant::Participant;
pub use questionnaire_answer::QuestionnaireAnswer;
pub use team::Team;
pub use team_member::TeamMember;
