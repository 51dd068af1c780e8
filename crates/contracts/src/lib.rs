//! Shared contracts between the ARTbeat admin frontend and the backend API.
//!
//! Everything here is plain data plus pure logic: wire records for each
//! admin resource, the campaign content-block model, and the email HTML
//! generator. No browser or network dependencies.

pub mod domain;
pub mod editor;
pub mod system;
