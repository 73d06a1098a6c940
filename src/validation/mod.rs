pub mod age;
pub mod content;
pub mod identifier;
pub mod verhoeff;

pub use age::AgeBandClassifier;
pub use content::ContentValidator;
pub use identifier::IdentifierReconciler;
pub use verhoeff::{IdentifierValidator, VerhoeffValidator};
