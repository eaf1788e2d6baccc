//! UI components for the Calcfolio GUI
//!
//! Layout:
//! - Toolbar (top): header, address bar, theme toggle
//! - Sidebar (left): search box and the calculator directory by category
//! - Input Panel (center): home/category listings or the calculator form
//! - Results Panel (right): the last report and the educational content
//! - Status Bar (bottom): canonical URL, keywords and status messages

pub mod calculator_form;
pub mod input_panel;
pub mod results_panel;
pub mod sidebar;
pub mod status_bar;
pub mod toolbar;
