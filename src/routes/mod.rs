pub mod analytics;
pub mod contact;
pub mod content;
pub mod gate;
pub mod health;
pub mod me;
pub mod reviews;
pub mod users;

pub use analytics::{list_analytics, regenerate_analytics};
pub use contact::submit_contact;
pub use content::{get_published_content, publish_content, publish_events};
pub use gate::{gate_status, unlock_gate};
pub use health::health_check;
pub use me::current_operator;
pub use reviews::{admin_list_reviews, list_reviews, moderate_review, submit_review};
pub use users::{create_user, delete_user, list_users, update_user};
