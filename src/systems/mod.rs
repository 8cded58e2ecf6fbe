pub mod collision;
pub mod diagnostics;
pub mod rigid_body;
