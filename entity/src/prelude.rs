pub use super::family::Entity as Family;
pub use super::family_member::Entity as FamilyMember;
pub use super::survey_completion::Entity as SurveyCompletion;
