pub mod analyze_button;
pub mod header;
pub mod output_panel;
pub mod prompt_input;
pub mod upload_area;
