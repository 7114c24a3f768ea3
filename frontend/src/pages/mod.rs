pub mod admin;
#[cfg(feature = "role-bindings")]
pub mod admin_role_bindings;
pub mod admin_roles;
pub mod admin_users;
pub mod not_found;
