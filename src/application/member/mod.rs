mod errors;
mod registration_service;

pub use errors::{MemberApplicationError, Result};
pub use registration_service::{
    ServiceDependencies, find_member, find_member_by_name, find_members, join,
};
