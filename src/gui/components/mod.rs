// src/gui/components/mod.rs
pub mod action_buttons;
pub mod chart_view;
pub mod data_table;
pub mod options_panel;
pub mod tabs;
