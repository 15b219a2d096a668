pub use super::activity_log::Entity as ActivityLog;
pub use super::compliance_document::Entity as ComplianceDocument;
pub use super::contractor::Entity as Contractor;
pub use super::gas_safe_cache::Entity as GasSafeCache;
pub use super::invoice::Entity as Invoice;
pub use super::payment_run::Entity as PaymentRun;
pub use super::payment_run_item::Entity as PaymentRunItem;
pub use super::user_profile::Entity as UserProfile;
pub use super::verification_log::Entity as VerificationLog;
