pub mod accordion;
pub mod contact_box;
pub mod footer;
pub mod header;
pub mod icons;
pub mod link_button;
pub mod sections;
pub mod text;
