pub mod static_content;
